pub(super) fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        "app.title" => "SkinSense",
        "app.subtitle" => "Face detection and skin tone analysis",
        "upload.title" => "Upload a photo",
        "upload.subtitle" => "Use a clear, well-lit picture of your face",
        "upload.dragText" => "Drag a photo onto this window or type its path",
        "upload.supportedFormats" => "Supported formats: JPG, PNG, WebP",
        "upload.maxSize" => "Maximum size: 10MB",
        "upload.button" => "Enter: Analyze",
        "upload.busy" => "An analysis is already running",
        "analysis.analyzing" => "Analyzing image...",
        "analysis.results" => "Analysis results",
        "analysis.facesDetected" => "Faces detected",
        "analysis.skinTone" => "Skin tone",
        "analysis.hexValue" => "Hex",
        "analysis.preview" => "Image",
        "analysis.interpretation.title" => "Interpretation",
        "analysis.interpretation.good" => "Your skin looks bright and even. Keep up your routine.",
        "analysis.interpretation.fair" => "Your skin looks fair. Hydration and sun protection will help.",
        "analysis.interpretation.needsCare" => "Your skin could use some extra care and attention.",
        "errors.fileTooLarge" => "The file is too large. Maximum size is 10MB.",
        "errors.invalidFormat" => "Invalid format. Please use JPG, PNG or WebP.",
        "errors.analysisFailed" => "Analysis failed",
        "errors.noFaceDetected" => "No face detected. Try a clearer photo.",
        "errors.fileUnreadable" => "The file could not be opened.",
        "buttons.tryAgain" => "Enter: Try again",
        "buttons.uploadAnother" => "Enter: Upload another",
        "language.toggle" => "Language",
        "language.english" => "English",
        "language.spanish" => "Spanish",
        "service.online" => "Service online",
        "service.offline" => "Service offline",
        "service.checking" => "Checking service...",
        "footer.quit" => "Ctrl+Q: Quit",
        "footer.language" => "Ctrl+L: Language",
        _ => return None,
    };
    Some(text)
}
