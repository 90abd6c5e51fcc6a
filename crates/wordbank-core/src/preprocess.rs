pub trait Preprocessor {
    /// Default search-term cleanup: surrounding whitespace only
    fn process(&self, text: &str) -> String {
        text.trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Strips a trailing line break and carriage returns from console input
pub struct LinePreprocessor;
impl Preprocessor for LinePreprocessor {
    fn process(&self, text: &str) -> String {
        text.replace(['\n', '\r'], "").trim().to_string()
    }
}
