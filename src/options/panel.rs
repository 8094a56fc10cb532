use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Comparison Panel", inline)]
#[serde(default)]
/// Center panel of comparison animations.
pub struct PanelOptions {
    /// Draw the circuit diagram above the equals sign.
    #[schemars(title = "Show Circuit")]
    pub show_circuit: bool,
    /// Draw the equation below the equals sign.
    #[schemars(title = "Show Equation")]
    pub show_equation: bool,
    /// Equation markup; derived from the gate lists when absent.
    #[schemars(title = "Equation")]
    pub equation: Option<String>,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            show_circuit: true,
            show_equation: true,
            equation: None,
        }
    }
}
