use leptos::*;

use traffic_core::{Dashboard, Incident, IncidentStatus};

use crate::components::icon::Icon;
use crate::components::{severity_accent_class, severity_badge_class};

/// Side panel showing the currently selected incident.
///
/// The panel keeps showing a selected incident even after the list filter
/// hides it from view.
#[component]
pub fn DetailsPanel(dash: RwSignal<Dashboard>) -> impl IntoView {
    let selected = move || dash.with(|d| d.selected().cloned());

    view! {
        <Show
            when=move || selected().is_some()
            fallback=|| view! {
                <div class="bg-white rounded-lg border border-slate-200 p-8 text-center">
                    <span class="inline-block text-slate-300 mb-4">
                        <Icon name="alert-circle" class="w-12 h-12"/>
                    </span>
                    <p class="text-slate-600">"Select an incident to view details"</p>
                </div>
            }
        >
            {move || selected().map(|incident| view! { <IncidentDetails incident=incident/> })}
        </Show>
    }
}

#[component]
fn IncidentDetails(incident: Incident) -> impl IntoView {
    let accent = severity_accent_class(incident.severity);
    let badge = severity_badge_class(incident.severity);
    let is_active = incident.status == IncidentStatus::Active;
    let status_dot = if is_active {
        "bg-red-500 animate-pulse"
    } else {
        "bg-green-500"
    };

    view! {
        <div class="bg-white rounded-lg border border-slate-200 overflow-hidden">
            <div class=format!("h-2 {accent}")></div>

            <div class="p-6">
                <h3 class="text-lg font-semibold text-slate-900 mb-4">"Incident Details"</h3>

                <div class="space-y-4">
                    <div>
                        <p class="text-xs font-semibold text-slate-500 uppercase mb-1">
                            "Incident ID"
                        </p>
                        <p class="text-sm text-slate-900 font-mono bg-slate-50 p-2 rounded">
                            {incident.id.clone()}
                        </p>
                    </div>

                    <div>
                        <p class="text-xs font-semibold text-slate-500 uppercase mb-1">"Type"</p>
                        <p class="text-sm text-slate-900">{incident.incident_type.label()}</p>
                    </div>

                    <div>
                        <p class="text-xs font-semibold text-slate-500 uppercase mb-1">
                            "Severity"
                        </p>
                        <span class=format!(
                            "inline-block px-3 py-1 rounded-full text-xs font-semibold {badge}",
                        )>{incident.severity.label()}</span>
                    </div>

                    <div>
                        <p class="text-xs font-semibold text-slate-500 uppercase mb-1">
                            "Location"
                        </p>
                        <div class="flex items-start gap-2">
                            <span class="text-slate-600 mt-0.5 flex-shrink-0">
                                <Icon name="map-pin" class="w-4 h-4"/>
                            </span>
                            <p class="text-sm text-slate-900">{incident.location.clone()}</p>
                        </div>
                    </div>

                    <div>
                        <p class="text-xs font-semibold text-slate-500 uppercase mb-1">"Camera"</p>
                        <p class="text-sm text-slate-900 font-mono bg-slate-50 p-2 rounded">
                            {incident.camera.clone()}
                        </p>
                    </div>

                    <div>
                        <p class="text-xs font-semibold text-slate-500 uppercase mb-1">
                            "Detected"
                        </p>
                        <div class="flex items-center gap-2">
                            <span class="text-slate-600">
                                <Icon name="calendar" class="w-4 h-4"/>
                            </span>
                            <p class="text-sm text-slate-900">{incident.timestamp.clone()}</p>
                        </div>
                    </div>

                    <div>
                        <p class="text-xs font-semibold text-slate-500 uppercase mb-1">"Status"</p>
                        <div class="flex items-center gap-2">
                            <span class=format!("w-2 h-2 rounded-full {status_dot}")></span>
                            <p class="text-sm text-slate-900">{incident.status.label()}</p>
                        </div>
                    </div>

                    <div class="pt-4">
                        <p class="text-xs font-semibold text-slate-500 uppercase mb-2">
                            "Description"
                        </p>
                        <p class="text-sm text-slate-600">{incident.description.clone()}</p>
                    </div>
                </div>

                <div class="mt-6 space-y-2">
                    <Show when=move || is_active fallback=|| ()>
                        <button class="w-full text-sm px-3 py-2 rounded-md border border-slate-200 hover:bg-slate-50 transition">
                            "View Camera Feed"
                        </button>
                        <button class="w-full text-sm px-3 py-2 rounded-md border border-slate-200 hover:bg-slate-50 transition">
                            "Contact Responders"
                        </button>
                    </Show>
                    <button class="w-full text-sm px-3 py-2 rounded-md border border-slate-200 hover:bg-slate-50 transition">
                        "View Full Report"
                    </button>
                </div>
            </div>
        </div>
    }
}
