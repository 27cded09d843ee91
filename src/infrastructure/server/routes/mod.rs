pub(crate) mod chat;
pub(crate) mod model_info;
