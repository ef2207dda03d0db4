/// A schema that decoded fine but turned out to be semantically broken at
/// match time: `check`/`match_name` reached a `Call` to a function the
/// registry has no entry for. Fatal to the in-flight call, not a false
/// result (see the distinction between a policy rejection and a model
/// error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelError {
    pub fn_id: String,
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "call to undefined user function {:?}", self.fn_id)
    }
}

impl std::error::Error for ModelError {}

impl From<lvs_match::UndefinedFn> for ModelError {
    fn from(e: lvs_match::UndefinedFn) -> Self {
        ModelError { fn_id: e.0 }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
