//! Record lookup over a loaded collection.

use crate::types::{Tea, TeaId};

/// First tea whose name equals `name` exactly. Case-sensitive, no normalization.
pub fn find_by_name<'a>(teas: &'a [Tea], name: &str) -> Option<&'a Tea> {
    teas.iter().find(|tea| tea.name == name)
}

/// First tea carrying `id`.
pub fn find_by_id(teas: &[Tea], id: TeaId) -> Option<&Tea> {
    teas.iter().find(|tea| tea.id == id)
}
