//! Presenter: drives the operations and owns the sectioned view model.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use reposcout_core::{BoxedOperation, RepoEntity, SearchError, ViewData};

use crate::classify::{disposition, Disposition};

// ---------------------------------------------------------------------------
// Boundary traits
// ---------------------------------------------------------------------------

/// Presentation boundary consumed by the UI layer.
///
/// Callbacks receive a snapshot of the view model taken under the same lock
/// as the update, so a callback never observes a half-applied state.
pub trait SearchView: Send + Sync {
    /// Fired after the recommendations section is populated.
    fn on_recommended_updated(&self, data: &ViewData);
    /// Fired after the search-results section is replaced.
    fn on_searched_updated(&self, data: &ViewData);
}

/// Routing boundary: detail navigation and alert presentation.
///
/// Called at most once per user action / per surfaced error respectively.
pub trait Wireframe: Send + Sync {
    /// Present the detail view for the selected repository.
    fn present_detail(&self, entity: RepoEntity);
    /// Surface a genuine failure to the user.
    fn present_alert(&self, error: SearchError);
}

// ---------------------------------------------------------------------------
// SearchPresenter
// ---------------------------------------------------------------------------

/// The operations the presenter is constructed against.
///
/// All are type-erased, so network-backed, static, and test-double
/// producers are interchangeable without recompiling the presenter.
pub struct PresenterDependencies {
    /// Zero-input producer of the fixed recommendation list.
    pub recommend: BoxedOperation<(), Vec<RepoEntity>>,
    /// Query-driven search producer (single-flight).
    pub search: BoxedOperation<String, Vec<RepoEntity>>,
    /// Deterministic ordering applied to search results before display.
    pub sort: BoxedOperation<Vec<RepoEntity>, Vec<RepoEntity>>,
}

/// Drives the recommendation/search/sort operations and owns the
/// [`ViewData`] consumed by the UI.
///
/// Cheap to clone; clones share the same view model and producers, so a
/// caller can move a clone into a spawned task to issue overlapping
/// searches.
#[derive(Clone)]
pub struct SearchPresenter {
    inner: Arc<Inner>,
}

struct Inner {
    view: Arc<dyn SearchView>,
    wireframe: Arc<dyn Wireframe>,
    deps: PresenterDependencies,
    view_data: Mutex<ViewData>,
}

impl SearchPresenter {
    /// Build a presenter against the given boundaries and producers.
    #[must_use]
    pub fn new(
        view: Arc<dyn SearchView>,
        wireframe: Arc<dyn Wireframe>,
        deps: PresenterDependencies,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                view,
                wireframe,
                deps,
                view_data: Mutex::new(ViewData::new()),
            }),
        }
    }

    /// Snapshot of the current view model.
    #[must_use]
    pub fn view_data(&self) -> ViewData {
        self.inner.view_data.lock().clone()
    }

    /// Populate the recommendations section. Called once, at startup.
    pub async fn load_recommended(&self) {
        let inner = &self.inner;
        match inner.deps.recommend.execute(()).await {
            Ok(items) => {
                let snapshot = {
                    let mut data = inner.view_data.lock();
                    data.set_recommended(items);
                    data.clone()
                };
                inner.view.on_recommended_updated(&snapshot);
            }
            // Recommendations cannot fail today; the completion still goes
            // through the same disposition chokepoint as every other one.
            Err(error) => inner.report(error),
        }
    }

    /// Issue a search. A new call supersedes any outstanding one, so only
    /// the most recently issued query can update the view model.
    pub async fn search(&self, query: impl Into<String> + Send) {
        let query = query.into();
        let inner = &self.inner;
        let result = inner.deps.search.execute(query).await;
        match result {
            Ok(items) => match inner.deps.sort.execute(items).await {
                Ok(sorted) => {
                    let snapshot = {
                        let mut data = inner.view_data.lock();
                        data.set_searched(sorted);
                        data.clone()
                    };
                    inner.view.on_searched_updated(&snapshot);
                }
                Err(error) => inner.report(error),
            },
            Err(error) => inner.report(error),
        }
    }

    /// Route the entity at `(section, index)` to the detail view.
    ///
    /// Selection is a pure lookup by position; the entity reaches the
    /// routing collaborator unchanged.
    ///
    /// # Panics
    ///
    /// Panics when the position is out of range (contract violation).
    pub fn select(&self, section: usize, index: usize) {
        let entity = self.inner.view_data.lock().item(section, index).clone();
        self.inner.wireframe.present_detail(entity);
    }
}

impl Inner {
    /// Single visibility chokepoint for every failed completion.
    fn report(&self, error: SearchError) {
        match disposition(&error) {
            Disposition::Suppress => {
                debug!(%error, "suppressed superseded completion");
            }
            Disposition::Surface => {
                warn!(%error, "search failed");
                self.wireframe.present_alert(error);
            }
        }
    }
}
