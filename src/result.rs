use crate::SdkError;

pub type SdkResult<T> = std::result::Result<T, SdkError>;
