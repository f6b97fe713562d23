use crate::render::RenderOptions;

/// Settings for a whole generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Layout and well-known classes used by the renderer
    pub render: RenderOptions,
    /// Number of worker threads; `None` uses rayon's default
    pub worker_count: Option<usize>,
    /// Root under which every package keeps its test namespace
    pub test_namespace: String,
    pub stub_suffix: String,
    pub manifest_suffix: String,
    pub test_stub_suffix: String,
    pub test_manifest_suffix: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            worker_count: None,
            test_namespace: "Test".to_string(),
            stub_suffix: ".rbi".to_string(),
            manifest_suffix: ".deps.json".to_string(),
            test_stub_suffix: ".test.rbi".to_string(),
            test_manifest_suffix: ".test.deps.json".to_string(),
        }
    }
}

impl GenerateOptions {
    /// Builder method to set the worker count
    pub fn with_workers(mut self, count: usize) -> Self {
        self.worker_count = Some(count);
        self
    }
}
