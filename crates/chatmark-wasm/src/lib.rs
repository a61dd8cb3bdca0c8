use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn render_message(input: &str, escape_html: Option<bool>) -> String {
    let mut builder = chatmark::ConfigBuilder::default();
    if escape_html.unwrap_or(false) {
        builder = builder.escape(chatmark::EscapePolicy::Html);
    }
    chatmark::Renderer::new(&builder.build()).render(input)
}

// Expose the token stream for debugging in the browser
#[wasm_bindgen]
pub fn tokenize_debug(input: &str) -> String {
    let tokens = chatmark::tokenize(input);
    format!("{tokens:#?}")
}
