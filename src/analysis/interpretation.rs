use crate::analysis::types::AnalysisResult;

/// Qualitative band derived from a result on the client side.
///
/// The service's own `interpretation` text is not used for this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    NoFaceDetected,
    Good,
    Fair,
    NeedsCare,
}

impl Interpretation {
    pub fn from_result(result: &AnalysisResult) -> Self {
        if result.faces_detected == 0 {
            return Interpretation::NoFaceDetected;
        }
        let brightness = result.skin_tone.brightness();
        if brightness > 200.0 {
            Interpretation::Good
        } else if brightness > 150.0 {
            Interpretation::Fair
        } else {
            Interpretation::NeedsCare
        }
    }

    pub fn locale_key(self) -> &'static str {
        match self {
            Interpretation::NoFaceDetected => "errors.noFaceDetected",
            Interpretation::Good => "analysis.interpretation.good",
            Interpretation::Fair => "analysis.interpretation.fair",
            Interpretation::NeedsCare => "analysis.interpretation.needsCare",
        }
    }
}
