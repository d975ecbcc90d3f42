pub(super) fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        "app.title" => "SkinSense",
        "app.subtitle" => "Detección de rostros y análisis del tono de piel",
        "upload.title" => "Sube una foto",
        "upload.subtitle" => "Usa una foto nítida y bien iluminada de tu rostro",
        "upload.dragText" => "Arrastra una foto a esta ventana o escribe su ruta",
        "upload.supportedFormats" => "Formatos admitidos: JPG, PNG, WebP",
        "upload.maxSize" => "Tamaño máximo: 10MB",
        "upload.button" => "Enter: Analizar",
        "upload.busy" => "Ya hay un análisis en curso",
        "analysis.analyzing" => "Analizando imagen...",
        "analysis.results" => "Resultados del análisis",
        "analysis.facesDetected" => "Rostros detectados",
        "analysis.skinTone" => "Tono de piel",
        "analysis.hexValue" => "Hex",
        "analysis.preview" => "Imagen",
        "analysis.interpretation.title" => "Interpretación",
        "analysis.interpretation.good" => "Tu piel se ve luminosa y uniforme. Sigue con tu rutina.",
        "analysis.interpretation.fair" => "Tu piel se ve bien. La hidratación y el protector solar ayudarán.",
        "analysis.interpretation.needsCare" => "Tu piel podría necesitar cuidados adicionales.",
        "errors.fileTooLarge" => "El archivo es demasiado grande. El tamaño máximo es 10MB.",
        "errors.invalidFormat" => "Formato no válido. Usa JPG, PNG o WebP.",
        "errors.analysisFailed" => "El análisis falló",
        "errors.noFaceDetected" => "No se detectó ningún rostro. Prueba con una foto más clara.",
        "errors.fileUnreadable" => "No se pudo abrir el archivo.",
        "buttons.tryAgain" => "Enter: Intentar de nuevo",
        "buttons.uploadAnother" => "Enter: Subir otra",
        "language.toggle" => "Idioma",
        "language.english" => "Inglés",
        "language.spanish" => "Español",
        "service.online" => "Servicio disponible",
        "service.offline" => "Servicio no disponible",
        "service.checking" => "Comprobando servicio...",
        "footer.quit" => "Ctrl+Q: Salir",
        "footer.language" => "Ctrl+L: Idioma",
        _ => return None,
    };
    Some(text)
}
