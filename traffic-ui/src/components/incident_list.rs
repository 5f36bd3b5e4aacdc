use leptos::*;

use traffic_core::{Dashboard, FilterStatus, Incident, IncidentStatus};

use crate::components::icon::Icon;
use crate::components::{severity_badge_class, severity_border_class, type_icon};

/// Filter control plus the clickable incident rows.
#[component]
pub fn IncidentList(dash: RwSignal<Dashboard>) -> impl IntoView {
    let visible = move || dash.with(|d| d.visible());

    view! {
        <div class="bg-white rounded-lg border border-slate-200">
            <div class="border-b border-slate-200 p-4 flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <Icon name="filter" class="w-5 h-5 text-slate-400"/>
                    <select
                        class="text-sm px-3 py-1 rounded border border-slate-200 bg-white cursor-pointer"
                        prop:value=move || dash.with(|d| d.filter().as_str().to_string())
                        on:change=move |ev| {
                            if let Ok(filter) = event_target_value(&ev).parse::<FilterStatus>() {
                                dash.update(|d| d.set_filter(filter));
                            }
                        }
                    >
                        <option value="all">"All Incidents"</option>
                        <option value="active">"Active Only"</option>
                        <option value="resolved">"Resolved"</option>
                    </select>
                </div>
                <span class="text-xs text-slate-500">
                    {move || format!("{} results", visible().len())}
                </span>
            </div>

            <div class="divide-y divide-slate-200">
                <For
                    each=visible
                    key=|incident| incident.id.clone()
                    children=move |incident| view! { <IncidentRow dash=dash incident=incident/> }
                />
            </div>
        </div>
    }
}

#[component]
fn IncidentRow(dash: RwSignal<Dashboard>, incident: Incident) -> impl IntoView {
    let (icon_name, icon_tint) = type_icon(incident.incident_type);
    let border = severity_border_class(incident.severity);
    let badge = severity_badge_class(incident.severity);
    let type_label = incident.incident_type.label();
    let severity_label = incident.severity.label();
    let is_active = incident.status == IncidentStatus::Active;

    let id = incident.id.clone();
    let description = incident.description.clone();
    let location = incident.location.clone();
    let timestamp = incident.timestamp.clone();

    let selected_id = incident.id.clone();
    let is_selected =
        move || dash.with(|d| d.selected().map(|s| s.id == selected_id).unwrap_or(false));

    view! {
        <button
            class=move || {
                format!(
                    "w-full p-4 hover:bg-slate-50 transition text-left border-l-4 {} {}",
                    border,
                    if is_selected() { "bg-blue-50" } else { "" },
                )
            }
            on:click=move |_| dash.update(|d| d.select(incident.clone()))
        >
            <div class="flex items-start justify-between mb-2">
                <div class="flex items-center gap-3">
                    <span class=icon_tint>
                        <Icon name=icon_name class="w-5 h-5"/>
                    </span>
                    <div>
                        <p class="font-semibold text-slate-900">{type_label}</p>
                        <p class="text-xs text-slate-500">{id}</p>
                    </div>
                </div>
                <span class=format!("px-2 py-1 rounded text-xs font-semibold {badge}")>
                    {severity_label}
                </span>
            </div>

            <p class="text-sm text-slate-600 mb-2">{description}</p>

            <div class="flex items-center gap-4 text-xs text-slate-500">
                <div class="flex items-center gap-1">
                    <Icon name="map-pin" class="w-3 h-3"/>
                    {location}
                </div>
                <div class="flex items-center gap-1">
                    <Icon name="clock" class="w-3 h-3"/>
                    {timestamp}
                </div>
            </div>

            <Show when=move || is_active fallback=|| ()>
                <div class="mt-2 pt-2 border-t border-slate-200">
                    <span class="inline-flex items-center gap-1 text-xs font-semibold text-red-600">
                        <span class="w-2 h-2 bg-red-600 rounded-full animate-pulse"></span>
                        "Active - Emergency Services Notified"
                    </span>
                </div>
            </Show>
        </button>
    }
}
