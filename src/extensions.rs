/// Local module bound into the application at startup.
///
/// Nothing in the startup sequence calls into it; it is reachable from the
/// mounted application through `MountedApp::module::<Marklee>()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Marklee;
