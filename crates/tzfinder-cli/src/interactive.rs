use anyhow::Result;
use dialoguer::Input;

/// Prompt for the address to search
///
/// Only checks for blank input; length rules are applied by the search itself.
pub fn prompt_address() -> Result<String> {
    let address: String = Input::new()
        .with_prompt("Enter an address, city or landmark")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Please enter an address to search for timezone information.")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(address)
}
