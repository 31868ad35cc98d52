//! Naming helpers for generated Python code.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `customers` | [`class_name_for_table`] | `Customers` |
//! | `order_items` | [`class_name_for_table`] | `Order_items` |
//! | `Customer` | [`module_file_name`] | `customer.py` |
//!
//! The table-to-class transform only upper-cases the first character. It does not
//! produce PascalCase for multi-word names; generated files depend on this exact
//! behaviour, so it must not be "improved" silently.

/// Capitalize the first letter of a string, leaving the rest unchanged.
///
/// # Examples
///
/// ```
/// use modelgen_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("helloWorld"), "HelloWorld");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Class name for a reflected table.
pub fn class_name_for_table(table_name: &str) -> String {
    capitalize(table_name)
}

/// File name a pydantic model is saved under: the lowercased class name plus `.py`.
///
/// ```
/// use modelgen_core::naming::module_file_name;
///
/// assert_eq!(module_file_name("Customer"), "customer.py");
/// ```
pub fn module_file_name(class_name: &str) -> String {
    format!("{}.py", class_name.to_lowercase())
}
