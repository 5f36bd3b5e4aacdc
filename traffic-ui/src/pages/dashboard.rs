use leptos::*;
use leptos_router::*;

use traffic_core::Dashboard;

use crate::components::details_panel::DetailsPanel;
use crate::components::icon::Icon;
use crate::components::incident_list::IncidentList;
use crate::components::metrics::MetricCard;

/// Incidents dashboard route. All interaction state lives in one
/// [`Dashboard`] signal; the incident set itself is fixed.
#[component]
pub fn IncidentsDashboard() -> impl IntoView {
    let dash = create_rw_signal(Dashboard::new());

    let active = Signal::derive(move || dash.with(|d| d.active_count().to_string()));
    let resolved = Signal::derive(move || dash.with(|d| d.resolved_count().to_string()));
    let avg_response = "2.4s".to_string();
    let accuracy = "99.2%".to_string();

    view! {
        <div class="min-h-screen bg-slate-50">
            <header class="bg-white border-b border-slate-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                    <div class="flex items-center gap-4">
                        <A href="/" class="p-2 rounded-md hover:bg-slate-100 transition">
                            <Icon name="arrow-left" class="w-5 h-5"/>
                        </A>
                        <div>
                            <h1 class="text-2xl font-bold text-slate-900">
                                "Incidents Dashboard"
                            </h1>
                            <p class="text-sm text-slate-600">"Real-time traffic monitoring"</p>
                        </div>
                    </div>
                    <div class="flex items-center gap-2">
                        <button class="flex items-center text-sm px-3 py-2 rounded-md border border-slate-200 bg-white hover:bg-slate-50 transition">
                            <span class="mr-2"><Icon name="download" class="w-4 h-4"/></span>
                            "Export"
                        </button>
                    </div>
                </div>
            </header>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Key metrics: the first two are live counts over the fixed
                // set, the last two are product copy.
                <div class="grid md:grid-cols-4 gap-4 mb-8">
                    <MetricCard
                        label="Active Incidents"
                        value=active
                        icon="alert-circle"
                        icon_class="w-12 h-12 text-red-500/20"
                    />
                    <MetricCard
                        label="Resolved Today"
                        value=resolved
                        icon="activity"
                        icon_class="w-12 h-12 text-green-500/20"
                    />
                    <MetricCard
                        label="Avg Response Time"
                        value=avg_response
                        icon="zap"
                        icon_class="w-12 h-12 text-blue-500/20"
                    />
                    <MetricCard
                        label="Detection Accuracy"
                        value=accuracy
                        icon="trending-up"
                        icon_class="w-12 h-12 text-blue-600/20"
                    />
                </div>

                <div class="grid lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2">
                        <IncidentList dash=dash/>
                    </div>
                    <div>
                        <DetailsPanel dash=dash/>
                    </div>
                </div>
            </div>
        </div>
    }
}
