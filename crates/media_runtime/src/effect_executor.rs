//! Effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{effects::execute_effect, runtime_context::MediaLibraryContext};

/// Installs the executor that drains reducer-emitted effects in order.
pub fn install(runtime: MediaLibraryContext) {
    // Clear the queue before spawning so nested dispatches enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            let host = runtime.host.get_value();
            spawn_local(async move {
                for action in execute_effect(&host, effect).await {
                    runtime.dispatch_action(action);
                }
            });
        }
    });
}
