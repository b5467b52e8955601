mod app_state;
mod bridge_info;

pub use app_state::AppState;
pub use bridge_info::{BRIDGE_NAME, BRIDGE_VERSION, BridgeInfo};
