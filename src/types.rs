use napi_derive::napi;

/// One gradient to build in a batch call: `steps` intermediate colors
/// between `from` and `to`.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct GradientRequest {
    pub from: String,
    pub to: String,
    pub steps: i64,
}
