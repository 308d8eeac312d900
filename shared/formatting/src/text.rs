/// Upper-cases the first character and lower-cases the rest.
///
/// `capitalize("hELLo WoRLd")` yields `"Hello world"`. Empty input is
/// returned unchanged.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
