//! Line-oriented terminal front end.
//!
//! The shell plays the router's role: it tracks the current route, activates
//! the matching screen on every navigation, and routes each command to the
//! screen that offers it. Screens talk back through [`NoticeBoard`] and
//! [`PendingNavigation`], which the shell drains after each command.

mod command;
mod render;
mod state;

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::DirectoryApi;
use crate::domain::{AddScreen, DetailScreen, HomeScreen, Route};

pub use self::command::{Command, CommandError, USAGE};
pub use self::state::{NoticeBoard, PendingNavigation};

/// What the caller should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Print the current page and prompt again.
    Continue,
    /// Print [`USAGE`] and prompt again.
    ShowHelp,
    /// Stop reading input.
    Quit,
}

/// Router plus the three screens.
pub struct Shell {
    route: Route,
    home: HomeScreen,
    detail: DetailScreen,
    add: AddScreen,
    notices: Arc<NoticeBoard>,
    navigation: Arc<PendingNavigation>,
}

impl Shell {
    /// Build a shell over `api`. Nothing is fetched until [`Shell::open`].
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        let notices = Arc::new(NoticeBoard::default());
        let navigation = Arc::new(PendingNavigation::default());
        Self {
            route: Route::Home,
            home: HomeScreen::new(Arc::clone(&api), notices.clone()),
            detail: DetailScreen::new(Arc::clone(&api)),
            add: AddScreen::new(api, notices.clone(), navigation.clone()),
            notices,
            navigation,
        }
    }

    /// Route currently shown.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Navigate to `route` and activate its screen.
    ///
    /// Load failures are already logged and reflected in the screen's phase,
    /// so they do not surface here.
    pub async fn open(&mut self, route: Route) {
        debug!(%route, "navigation end");
        self.route = route;
        let loaded = match &self.route {
            Route::Home => self.home.fetch().await,
            Route::Add => self.add.activate().await,
            Route::EmployeeDetail { .. } => self.detail.on_navigation_end(&self.route).await,
        };
        if let Err(err) = loaded {
            debug!(error = %err, route = %self.route, "page left in failed state");
        }
    }

    /// Run one command, then follow any navigation it requested.
    ///
    /// # Errors
    ///
    /// [`CommandError::WrongPage`] when the current page does not offer the
    /// action. Screen-level failures are reported as notices instead.
    pub async fn execute(&mut self, command: Command) -> Result<Flow, CommandError> {
        match command {
            Command::Navigate(route) => self.open(route).await,
            Command::Reload => self.open(self.route.clone()).await,
            Command::DeleteEmployee(id) => {
                self.require(&Route::Home, "rm-employee", "home")?;
                if let Err(err) = self.home.delete_employee(id).await {
                    debug!(error = %err, %id, "employee not removed");
                }
            }
            Command::DeleteDesignation(id) => {
                self.require(&Route::Home, "rm-designation", "home")?;
                if let Err(err) = self.home.delete_designation(id).await {
                    debug!(error = %err, %id, "designation not removed");
                }
            }
            Command::AddEmployee(draft) => {
                self.require(&Route::Add, "new-employee", "add")?;
                if let Err(err) = self.add.add_employee(&draft).await {
                    debug!(error = %err, "employee not created");
                }
            }
            Command::AddDesignation(draft) => {
                self.require(&Route::Add, "new-designation", "add")?;
                if let Err(err) = self.add.add_designation(&draft).await {
                    debug!(error = %err, "designation not created");
                }
            }
            Command::Help => return Ok(Flow::ShowHelp),
            Command::Quit => return Ok(Flow::Quit),
        }

        if let Some(route) = self.navigation.take() {
            self.open(route).await;
        }
        Ok(Flow::Continue)
    }

    /// Text of the current page.
    pub fn render(&self) -> String {
        match self.route {
            Route::Home => render::home(&self.home.view(), self.home.phase()),
            Route::Add => render::add(&self.add.view(), self.add.phase()),
            Route::EmployeeDetail { .. } => render::detail(&self.detail.view(), self.detail.phase()),
        }
    }

    /// Notices posted since the last call.
    pub fn drain_notices(&self) -> Vec<String> {
        self.notices.drain()
    }

    fn require(
        &self,
        route: &Route,
        verb: &'static str,
        page: &'static str,
    ) -> Result<(), CommandError> {
        if &self.route == route {
            Ok(())
        } else {
            Err(CommandError::WrongPage { verb, page })
        }
    }
}
