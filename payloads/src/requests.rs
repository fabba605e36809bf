/// A bid on an auction item.
///
/// The amount is sent exactly as the user typed it; the backend owns
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceBid {
    pub amount: String,
}

impl PlaceBid {
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
        }
    }

    /// The multipart form the bid endpoint expects.
    pub fn to_form(&self) -> reqwest::multipart::Form {
        reqwest::multipart::Form::new().text("amount", self.amount.clone())
    }
}
