use lvs_model::Name;

/// The fields of a signed packet this façade needs: its name and the name
/// carried by its key locator, if any. A certificate is itself just a
/// `Data` whose name identifies the key it certifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
    pub name: Name,
    pub key_locator: Option<Name>,
}

pub type Certificate = Data;
