use serde::{Deserialize, Serialize};

/// One entry of the car catalog offered by the review form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarModel {
    #[serde(rename = "CarMake")]
    pub car_make: String,
    #[serde(rename = "CarModel")]
    pub car_model: String,
}

impl CarModel {
    /// Value used by the form's make/model selector, `"<make>|<model>"`.
    pub fn selection_value(&self) -> String {
        format!("{}|{}", self.car_make, self.car_model)
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.car_make, self.car_model)
    }
}
