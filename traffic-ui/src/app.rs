use leptos::*;
use leptos_router::*;

use crate::pages::{IncidentsDashboard, Landing};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Landing/>
                    <Route path="/incidents" view=IncidentsDashboard/>
                </Routes>
            </main>
        </Router>
    }
}
