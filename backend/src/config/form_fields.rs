use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Fields of the spreadsheet-backed form, keyed by our own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Hoping,
    Anything,
    ContactMethod,
}

// Entry ids are opaque identifiers assigned by the external form.
pub static FORM_FIELD_IDS: Lazy<HashMap<FormField, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(FormField::Name, "entry.2005620554");
    map.insert(FormField::Email, "entry.1045781291");
    map.insert(FormField::Phone, "entry.1166974658");
    map.insert(FormField::Hoping, "entry.839337160");
    map.insert(FormField::Anything, "entry.1065046570");
    // repeated once per selected method
    map.insert(FormField::ContactMethod, "entry.1474063298");
    map
});

pub fn field_id(field: FormField) -> &'static str {
    FORM_FIELD_IDS.get(&field).copied().unwrap_or_default()
}
