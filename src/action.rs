use serde::{Deserialize, Serialize};
use strum::Display;

/// Commands bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    StopTrail,
}
