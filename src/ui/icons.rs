pub struct Icons;

impl Icons {
    pub const TELESCOPE: &str = "🔭";
    pub const SEARCH: &str = "🔍";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const CLOCK: &str = "⏱️";
    pub const SAVE: &str = "💾";
    pub const STAR: &str = "⭐";
}
