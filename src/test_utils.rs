#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use crate::{
        app_state::AppState,
        config::Config,
        providers::{ChatProvider, MockChatProvider},
        repositories::InMemorySlotRepository,
    };

    /// App state with a mocked local provider, no hosted provider, and an
    /// in-memory store.
    pub fn test_state(local: MockChatProvider) -> AppState {
        AppState::with_parts(
            Config::test_config(),
            None,
            Arc::new(local),
            Arc::new(InMemorySlotRepository::new()),
        )
    }

    /// App state with both providers mocked and the hosted credential set.
    pub fn test_state_with_hosted(hosted: MockChatProvider, local: MockChatProvider) -> AppState {
        let mut config = Config::test_config();
        config.openai_api_key = Some(secrecy::SecretString::from("test_api_key".to_string()));
        AppState::with_parts(
            config,
            Some(Arc::new(hosted) as Arc<dyn ChatProvider>),
            Arc::new(local),
            Arc::new(InMemorySlotRepository::new()),
        )
    }

    /// A provider that always answers with the given completion.
    pub fn canned_provider(reply: &str) -> MockChatProvider {
        let reply = reply.to_string();
        let mut provider = MockChatProvider::new();
        provider
            .expect_complete()
            .returning(move |_, _| Ok(reply.clone()));
        provider
    }

    /// A provider that always fails as if the network were down.
    pub fn unreachable_provider() -> MockChatProvider {
        let mut provider = MockChatProvider::new();
        provider.expect_complete().returning(|_, _| {
            Err(crate::providers::ProviderError::Transport(
                "connection refused".to_string(),
            ))
        });
        provider
    }
}
