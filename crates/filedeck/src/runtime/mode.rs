pub(crate) mod browse;
pub(crate) mod edit;
pub(crate) mod upload_prompt;
