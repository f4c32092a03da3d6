use super::{Resolution, RouteParams, ServiceData, ServiceResult};

/// Lifecycle of one detail page instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    /// Route parameters are not available yet
    Idle,
    Loading {
        params: RouteParams,
    },
    Loaded {
        params: RouteParams,
        service: ServiceData,
    },
    NotFound {
        params: RouteParams,
    },
    Failed {
        params: RouteParams,
        message: String,
    },
}

/// Handle for one in-flight resolution; only the newest ticket may complete the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    params: RouteParams,
}

impl LoadTicket {
    pub fn params(&self) -> &RouteParams {
        &self.params
    }
}

/// Detail page state machine.
///
/// `Idle -> Loading` when both route parameters become available, then
/// `Loading -> Loaded | NotFound | Failed` when the resolution for the current
/// parameters completes. Results for superseded parameters are dropped.
#[derive(Debug, Clone)]
pub struct DetailPage {
    state: DetailState,
    generation: u64,
}

impl Default for DetailPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailPage {
    pub fn new() -> Self {
        Self {
            state: DetailState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Feed the current route parameters.
    ///
    /// Returns a ticket when a new resolution must start. Unchanged parameters
    /// do not restart a load; missing parameters put the page back to `Idle`.
    pub fn on_params(&mut self, category: Option<&str>, id: Option<&str>) -> Option<LoadTicket> {
        let Some(params) = RouteParams::from_parts(category, id) else {
            self.generation += 1;
            self.state = DetailState::Idle;
            return None;
        };

        if self.params() == Some(&params) && !matches!(self.state, DetailState::Failed { .. }) {
            return None;
        }

        self.generation += 1;
        self.state = DetailState::Loading {
            params: params.clone(),
        };
        Some(LoadTicket {
            generation: self.generation,
            params,
        })
    }

    /// Apply a finished resolution. Returns false when the ticket is stale.
    pub fn complete(&mut self, ticket: LoadTicket, outcome: ServiceResult<Resolution>) -> bool {
        if ticket.generation != self.generation
            || !matches!(self.state, DetailState::Loading { .. })
        {
            return false;
        }

        let params = ticket.params;
        self.state = match outcome {
            Ok(Resolution::Found { service }) => DetailState::Loaded { params, service },
            Ok(Resolution::NotFound { .. }) => DetailState::NotFound { params },
            Err(err) => DetailState::Failed {
                params,
                message: err.to_string(),
            },
        };
        true
    }

    pub fn params(&self) -> Option<&RouteParams> {
        match &self.state {
            DetailState::Idle => None,
            DetailState::Loading { params }
            | DetailState::Loaded { params, .. }
            | DetailState::NotFound { params }
            | DetailState::Failed { params, .. } => Some(params),
        }
    }

    /// The loaded service, if any
    pub fn service(&self) -> Option<&ServiceData> {
        match &self.state {
            DetailState::Loaded { service, .. } => Some(service),
            _ => None,
        }
    }

    /// True while the page should show the loading message
    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Idle | DetailState::Loading { .. })
    }
}
