pub mod interface;
pub mod libre;
pub mod relay;
pub mod factory;

pub use interface::{TranslateError, TranslateInterface, TranslationRequest, TranslationResult};
pub use libre::LibreClient;
pub use relay::RelayClient;
pub use factory::TranslateFactory;
