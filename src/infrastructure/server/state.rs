use crate::application::gateway::ChatGateway;
use crate::infrastructure::model::ModelClient;
use std::sync::Arc;

pub(crate) struct ServerState<C: ModelClient> {
    gateway: Arc<ChatGateway<C>>,
}

impl<C: ModelClient> ServerState<C> {
    pub(crate) fn new(gateway: Arc<ChatGateway<C>>) -> Self {
        Self { gateway }
    }

    pub(crate) fn gateway(&self) -> Arc<ChatGateway<C>> {
        Arc::clone(&self.gateway)
    }
}
