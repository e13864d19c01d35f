mod engine;
mod rpc;

use crate::engine::core::app_setup::create_app;
use crate::engine::core::launch_options::collect_overrides;

fn main() {
    let mut app = create_app(collect_overrides());

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
