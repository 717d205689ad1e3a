use ecamap_api::Marker;

/// Selects the marker that makes a method dispatchable.
///
/// Priority follows the configured kind list, not the order the markers
/// are attached in. Among several markers of the same kind the first one
/// reported by the host wins.
#[derive(Debug, Clone)]
pub struct AttributeMatcher {
    kinds: Vec<String>,
}

impl AttributeMatcher {
    pub fn new(kinds: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }

    pub fn kinds(&self) -> &[String] {
        &self.kinds
    }

    pub fn select<'m>(&self, markers: &'m [Marker]) -> Option<&'m Marker> {
        self.kinds
            .iter()
            .find_map(|kind| markers.iter().find(|marker| &marker.kind == kind))
    }
}
