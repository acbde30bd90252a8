use std::fmt;

/// Every page the front end can show, keyed by its web path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    SignIn,
    SignUp,
    Dashboard,
    HrDashboard,
    CandidateDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::Dashboard => "/dashboard",
            Route::HrDashboard => "/dashboard/hr",
            Route::CandidateDashboard => "/dashboard/candidate",
        }
    }

    /// The command that opens this page.
    pub fn command(&self) -> &'static str {
        match self {
            Route::Landing => "recruitsage",
            Route::SignIn => "recruitsage signin",
            Route::SignUp => "recruitsage signup",
            Route::Dashboard => "recruitsage dashboard",
            Route::HrDashboard => "recruitsage hr",
            Route::CandidateDashboard => "recruitsage candidate",
        }
    }

    /// Pages that redirect to sign-in when no session token exists.
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::HrDashboard | Route::CandidateDashboard)
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        [
            Route::Landing,
            Route::SignIn,
            Route::SignUp,
            Route::Dashboard,
            Route::HrDashboard,
            Route::CandidateDashboard,
        ]
        .into_iter()
        .find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
