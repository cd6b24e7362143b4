#[cfg(target_arch = "wasm32")]
fn main() {
    yew::Renderer::<mandap_search::App>::new().render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("mandap-search targets wasm32; build it with `trunk build`");
}
