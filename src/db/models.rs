use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A clinic customer.
///
/// `id` is zero until storage assigns one. Missing JSON fields deserialize to
/// empty strings; no validation happens here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Owner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl Owner {
    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    /// Overwrite the five contact fields from `request`; `id` is left alone.
    pub fn overwrite_details(&mut self, request: Owner) {
        self.first_name = request.first_name;
        self.last_name = request.last_name;
        self.city = request.city;
        self.address = request.address;
        self.telephone = request.telephone;
    }
}
