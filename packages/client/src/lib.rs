//! `reposcout` Client — the reqwest-backed search pipeline and its presenter.
//!
//! The pipeline, leaf to root:
//!
//! 1. **Request** (`request`): one HTTP GET per call, single-flight with
//!    cancel-then-replace supersession, response classification.
//! 2. **Interactors** (`search`, `recommend`): `Operation` producers the
//!    presenter is constructed against.
//! 3. **Classifier** (`classify`): decides which failed completions reach
//!    the user.
//! 4. **Presenter** (`presenter`): drives the operations, owns the
//!    sectioned view model, and talks to the view/routing boundaries.

pub mod classify;
pub mod config;
pub mod presenter;
pub mod recommend;
pub mod request;
pub mod search;

pub use classify::{disposition, Disposition};
pub use config::SearchConfig;
pub use presenter::{PresenterDependencies, SearchPresenter, SearchView, Wireframe};
pub use recommend::RecommendInteractor;
pub use request::SearchRequest;
pub use search::SearchInteractor;
