
use crate::SessionManager;

use dash_client::Client;
use dash_store::{MemoryStore, ThemePreference};

/// Manager over an in-memory store; the client points nowhere and must not be called.
fn offline_manager(store: &MemoryStore) -> SessionManager<MemoryStore> {
    SessionManager::new(
        Client::new("http://127.0.0.1:9"),
        store.clone(),
        ThemePreference::new(store.clone()),
    )
}

fn stored_user_json() -> &'static str {
    r#"{"id":7,"username":"carol","fullName":"Carol Danvers","phoneNumber":null,"email":null,"companyName":"Starforce","availableFunds":10.0,"monthlyFee":null,"debitAmount":null}"#
}
