use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SubscriptionListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for SubscriptionListState {
    fn default() -> Self {
        Self {
            sort_field: "startDate".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<SubscriptionListState> {
    RwSignal::new(SubscriptionListState::default())
}
