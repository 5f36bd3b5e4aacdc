use leptos::*;

use crate::components::icon::Icon;

/// One card in the key-metrics row at the top of the dashboard.
#[component]
pub fn MetricCard(
    label: &'static str,
    #[prop(into)] value: MaybeSignal<String>,
    icon: &'static str,
    icon_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg p-6 border border-slate-200">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-slate-600 text-sm font-medium">{label}</p>
                    <p class="text-3xl font-bold text-slate-900 mt-2">{value}</p>
                </div>
                <Icon name=icon class=icon_class/>
            </div>
        </div>
    }
}
