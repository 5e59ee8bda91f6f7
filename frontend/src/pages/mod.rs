pub mod ai_agents;
pub mod home;
pub mod smart_websites;
