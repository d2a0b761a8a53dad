//! Progressive section delivery: skeletons first, results as they resolve.

use std::fmt::Display;

use futures::stream::FuturesUnordered;
use futures::{FutureExt, Sink, StreamExt};
use shelf_core::WorkloadError;
use tracing::{debug, warn};

use crate::section::{SectionFallback, SectionTask};
use crate::sink::StreamingSink;

/// Render the skeleton slot for a section. Streamed inside the shell.
pub fn render_slot(name: &str, skeleton: &str) -> String {
    format!(
        r#"<div data-section-slot="{}">{}</div>"#,
        name, skeleton
    )
}

/// Render the replacement chunk for a resolved section.
///
/// The markup arrives after the slot, wherever the stream has reached; the
/// inline script moves it into the slot, replacing the skeleton.
pub fn render_replacement(name: &str, html: &str) -> String {
    format!(
        r#"<template data-section-for="{name}">{html}</template>
<script>
(function() {{
  const tpl = document.querySelector('template[data-section-for="{name}"]');
  const slot = document.querySelector('[data-section-slot="{name}"]');
  if (tpl && slot) {{
    slot.replaceChildren(tpl.content.cloneNode(true));
    tpl.remove();
  }}
}})();
</script>"#,
        name = name,
        html = html
    )
}

/// Drives a set of independent sections over a streaming sink.
///
/// All skeleton slots are sent up front; section futures then run
/// concurrently and each replacement streams the moment its future
/// resolves. A slow section never delays a finished sibling.
pub struct ProgressiveRenderer {
    tasks: Vec<SectionTask>,
}

impl ProgressiveRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Add a section.
    pub fn section(mut self, task: SectionTask) -> Self {
        self.tasks.push(task);
        self
    }

    /// Stream skeletons, then each section as it resolves.
    ///
    /// A failed section with an `Inline` fallback renders its error in
    /// place; a failed section with `Propagate` aborts with
    /// `WorkloadError::SectionFailed` for the enclosing error boundary.
    pub async fn run<S, E>(self, sink: &mut StreamingSink<S, E>) -> Result<(), WorkloadError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: Display,
    {
        let mut slots = String::new();
        for task in &self.tasks {
            slots.push_str(&task.lead);
            slots.push_str(&render_slot(&task.name, &task.skeleton));
            slots.push('\n');
        }
        sink.send_raw(slots.into_bytes()).await?;

        let mut pending: FuturesUnordered<_> = self
            .tasks
            .into_iter()
            .map(|task| {
                let SectionTask {
                    name,
                    fallback,
                    future,
                    ..
                } = task;
                future.map(move |result| (name, fallback, result))
            })
            .collect();

        while let Some((name, fallback, result)) = pending.next().await {
            let html = match result {
                Ok(html) => {
                    debug!(section = %name, "section resolved");
                    html
                }
                Err(err) => {
                    warn!(section = %name, error = %err, "section failed");
                    match fallback.render() {
                        Some(html) => html,
                        None => {
                            return Err(WorkloadError::SectionFailed(name, err.to_string()))
                        }
                    }
                }
            };
            sink.send_section(&name, &render_replacement(&name, &html))
                .await?;
        }

        Ok(())
    }
}

impl Default for ProgressiveRenderer {
    fn default() -> Self {
        Self::new()
    }
}
