use serde::{Deserialize, Serialize};

/// body returned alongside a non-2xx status. DRF views answer with either
/// `error` or `detail`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorBody {
    #[serde(alias = "detail")]
    pub error: String,
}
