use leptos::*;
use leptos_router::*;

use crate::components::icon::Icon;

static FEATURES: [(&str, &str, &str); 6] = [
    (
        "alert-circle",
        "Accident Detection",
        "Instantly identify vehicle collisions and road accidents with spatial analysis",
    ),
    (
        "trending-up",
        "Wrong-Way Driving",
        "Detect vehicles traveling in wrong directions with real-time trajectory analysis",
    ),
    (
        "clock",
        "Vehicle Breakdown Detection",
        "Monitor sudden vehicle stoppages and breakdowns on roadways",
    ),
    (
        "map-pin",
        "Lane Violation Detection",
        "Track illegal turns and lane violations with precision positioning",
    ),
    (
        "shield",
        "Pedestrian & Animal Detection",
        "Identify pedestrians and animals on highways for safety alerts",
    ),
    (
        "zap",
        "Instant Alert System",
        "Generate alerts with timestamp, camera ID, location, and incident type",
    ),
];

static CAPABILITIES: [(&str, &str, [&str; 3]); 3] = [
    (
        "video",
        "Live Video Stream Analysis",
        [
            "Multi-camera support",
            "Real-time processing",
            "Continuous monitoring",
        ],
    ),
    (
        "trending-up",
        "Vehicle Tracking",
        [
            "Pattern recognition",
            "Trajectory analysis",
            "Behavior classification",
        ],
    ),
    (
        "bell",
        "Smart Notifications",
        [
            "Traffic control centers",
            "Emergency services",
            "Customizable rules",
        ],
    ),
];

static STATS: [(&str, &str, &str); 4] = [
    ("zap", "<1s", "Detection Speed"),
    ("shield", "99.9%", "System Uptime"),
    ("bar-chart", "<1%", "False Alarms"),
    ("clock", "-68%", "Response Time"),
];

static STEPS: [(&str, &str, &str); 4] = [
    (
        "01",
        "Capture",
        "Multi-camera video feeds continuously stream to the system",
    ),
    (
        "02",
        "Analyze",
        "AI models analyze frames for anomalies and dangerous patterns",
    ),
    (
        "03",
        "Detect",
        "Incidents are classified by type and severity in real-time",
    ),
    (
        "04",
        "Alert",
        "Instant notifications sent to authorities and emergency services",
    ),
];

/// Marketing landing page. Static sections rendered from the literal
/// arrays above; the only interactive elements are the two links into the
/// dashboard route.
#[component]
pub fn Landing() -> impl IntoView {
    // Reset scroll when arriving from the dashboard.
    create_effect(move |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <div class="min-h-screen bg-white">
            <header class="fixed top-0 left-0 right-0 z-50 bg-white border-b border-slate-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 bg-blue-600 rounded-lg flex items-center justify-center text-white">
                            <Icon name="alert-circle" class="w-6 h-6"/>
                        </div>
                        <span class="text-xl font-bold text-slate-900">"TrafficAI"</span>
                    </div>
                    <nav class="hidden md:flex items-center gap-8">
                        <a href="#features" class="text-slate-600 hover:text-slate-900 transition">
                            "Features"
                        </a>
                        <a
                            href="#capabilities"
                            class="text-slate-600 hover:text-slate-900 transition"
                        >
                            "Capabilities"
                        </a>
                        <a href="#stats" class="text-slate-600 hover:text-slate-900 transition">
                            "Impact"
                        </a>
                    </nav>
                    <A
                        href="/incidents"
                        class="px-4 py-2 rounded-md bg-blue-600 text-white text-sm font-semibold hover:bg-blue-700 transition"
                    >
                        "Open Dashboard"
                    </A>
                </div>
            </header>

            <section class="pt-32 pb-20 px-4 sm:px-6 lg:px-8 bg-gradient-to-b from-slate-50 to-white">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="inline-block mb-6">
                        <div class="flex items-center gap-2 bg-blue-100 text-blue-600 px-4 py-2 rounded-full text-sm font-semibold">
                            <Icon name="zap" class="w-4 h-4"/>
                            "AI-Powered Traffic Intelligence"
                        </div>
                    </div>
                    <h1 class="text-5xl md:text-6xl font-bold text-slate-900 mb-6 leading-tight">
                        "Smart Traffic Incident "
                        <span class="text-blue-600">"Detection"</span>
                    </h1>
                    <p class="text-xl text-slate-600 mb-8 max-w-2xl mx-auto leading-relaxed">
                        "Harness the power of AI and computer vision to detect traffic incidents \
                         in real-time. Reduce emergency response times, improve road safety, and \
                         enable smarter traffic management across your city."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <A
                            href="/incidents"
                            class="px-6 py-3 rounded-md bg-blue-600 text-white font-semibold hover:bg-blue-700 transition"
                        >
                            "View Live Dashboard"
                        </A>
                        <button class="px-6 py-3 rounded-md border border-slate-200 text-slate-900 font-semibold hover:bg-slate-50 transition">
                            "Learn More"
                        </button>
                    </div>

                    <div class="mt-16 relative">
                        <div class="absolute inset-0 bg-gradient-to-r from-blue-200/40 to-sky-200/40 blur-3xl rounded-3xl"></div>
                        <div class="relative bg-gradient-to-b from-slate-900 to-slate-800 rounded-2xl p-8 md:p-12 text-white border border-slate-700">
                            <div class="flex items-center justify-between mb-4">
                                <div class="flex items-center gap-2">
                                    <Icon name="video" class="w-5 h-5"/>
                                    <span class="font-semibold">"Camera Feed Analysis"</span>
                                </div>
                                <div class="flex items-center gap-1 bg-green-500/20 text-green-400 px-3 py-1 rounded-full text-xs font-semibold">
                                    <Icon name="activity" class="w-3 h-3"/>
                                    "Live"
                                </div>
                            </div>
                            <div class="grid grid-cols-3 gap-4 text-sm">
                                <HeroTile value="24/7" label="Real-time"/>
                                <HeroTile value="<1s" label="Detection"/>
                                <HeroTile value="99%" label="Accuracy"/>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id="features" class="py-20 px-4 sm:px-6 lg:px-8">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl font-bold text-slate-900 mb-4">
                            "Incident Detection System"
                        </h2>
                        <p class="text-lg text-slate-600">
                            "Comprehensive detection capabilities powered by advanced computer vision"
                        </p>
                    </div>

                    <div class="grid md:grid-cols-2 gap-8">
                        {FEATURES
                            .iter()
                            .map(|&(icon, title, description)| view! {
                                <FeatureCard icon=icon title=title description=description/>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section
                id="capabilities"
                class="py-20 px-4 sm:px-6 lg:px-8 bg-gradient-to-b from-slate-50 to-white"
            >
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl font-bold text-slate-900 mb-4">
                            "Powerful Capabilities"
                        </h2>
                        <p class="text-lg text-slate-600">
                            "Enterprise-grade features for modern traffic management"
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        {CAPABILITIES
                            .iter()
                            .map(|&(icon, title, points)| view! {
                                <CapabilityCard icon=icon title=title points=points/>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="stats" class="py-20 px-4 sm:px-6 lg:px-8">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl font-bold text-slate-900 mb-4">"Real-Time Impact"</h2>
                        <p class="text-lg text-slate-600">
                            "Proven results in traffic safety and incident response"
                        </p>
                    </div>

                    <div class="grid md:grid-cols-4 gap-6">
                        {STATS
                            .iter()
                            .map(|&(icon, value, label)| view! { <StatTile icon=icon value=value label=label/> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-20 px-4 sm:px-6 lg:px-8 bg-gradient-to-b from-slate-50 to-white">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl font-bold text-slate-900 mb-4">"How It Works"</h2>
                        <p class="text-lg text-slate-600">
                            "Four-stage intelligent incident detection and response system"
                        </p>
                    </div>

                    <div class="grid md:grid-cols-4 gap-6">
                        {STEPS
                            .iter()
                            .enumerate()
                            .map(|(idx, &(num, title, description))| view! {
                                <div class="relative">
                                    {(idx < STEPS.len() - 1)
                                        .then(|| view! {
                                            <div class="hidden md:block absolute top-20 left-1/2 w-full h-1 bg-blue-100"></div>
                                        })}
                                    <StepCard num=num title=title description=description/>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-20 px-4 sm:px-6 lg:px-8 bg-gradient-to-r from-blue-600 to-blue-700 text-white">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-4xl font-bold mb-6">"Ready to Deploy?"</h2>
                    <p class="text-xl mb-8 opacity-90">
                        "Join cities worldwide using AI-powered traffic management to save lives"
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <A
                            href="/incidents"
                            class="px-6 py-3 rounded-md bg-white text-blue-700 font-semibold hover:bg-blue-50 transition"
                        >
                            "Access Live Dashboard"
                        </A>
                        <button class="px-6 py-3 rounded-md border border-white font-semibold hover:bg-white/10 transition">
                            "Contact Sales"
                        </button>
                    </div>
                </div>
            </section>

            <footer class="bg-slate-900 text-slate-300 py-12 px-4 sm:px-6 lg:px-8">
                <div class="max-w-6xl mx-auto">
                    <div class="grid md:grid-cols-4 gap-8 mb-8">
                        <div>
                            <div class="flex items-center gap-2 mb-4">
                                <div class="w-8 h-8 bg-blue-600 rounded-lg flex items-center justify-center text-white">
                                    <Icon name="alert-circle" class="w-5 h-5"/>
                                </div>
                                <span class="font-bold text-white">"TrafficAI"</span>
                            </div>
                            <p class="text-sm">"Intelligent traffic management powered by AI"</p>
                        </div>
                        <FooterColumn
                            heading="Product"
                            links=&[
                                ("#features", "Features"),
                                ("#capabilities", "Capabilities"),
                                ("#stats", "Impact"),
                            ]
                        />
                        <FooterColumn
                            heading="Company"
                            links=&[("#", "About"), ("#", "Blog"), ("#", "Careers")]
                        />
                        <FooterColumn
                            heading="Legal"
                            links=&[("#", "Privacy"), ("#", "Terms"), ("#", "Security")]
                        />
                    </div>
                    <div class="border-t border-slate-700 pt-8 text-sm text-center">
                        <p>"© 2024 TrafficAI. All rights reserved."</p>
                    </div>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn HeroTile(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="bg-slate-700/50 rounded p-4 text-center">
            <div class="text-2xl font-bold mb-2">{value}</div>
            <div class="text-slate-300">{label}</div>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-slate-50 to-slate-100 rounded-xl p-8 border border-slate-200 hover:border-blue-600 hover:shadow-lg transition">
            <div class="w-12 h-12 bg-blue-100 text-blue-600 rounded-lg flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6"/>
            </div>
            <h3 class="text-xl font-semibold text-slate-900 mb-2">{title}</h3>
            <p class="text-slate-600">{description}</p>
        </div>
    }
}

#[component]
fn CapabilityCard(
    icon: &'static str,
    title: &'static str,
    points: [&'static str; 3],
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-8 border border-slate-200">
            <div class="w-12 h-12 bg-blue-100 text-blue-600 rounded-lg flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6"/>
            </div>
            <h3 class="text-xl font-semibold text-slate-900 mb-4">{title}</h3>
            <ul class="space-y-3">
                {points
                    .iter()
                    .map(|point| view! {
                        <li class="flex items-center gap-2 text-slate-600">
                            <div class="w-2 h-2 bg-blue-600 rounded-full"></div>
                            {*point}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn StatTile(icon: &'static str, value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-blue-50 to-blue-100 rounded-xl p-8 border border-blue-200 text-center">
            <span class="inline-block text-blue-600 mb-4">
                <Icon name=icon class="w-8 h-8"/>
            </span>
            <div class="text-3xl font-bold text-slate-900 mb-2">{value}</div>
            <p class="text-slate-600">{label}</p>
        </div>
    }
}

#[component]
fn StepCard(
    num: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="relative z-10 bg-white rounded-xl p-8 border border-slate-200 text-center">
            <div class="text-5xl font-bold text-blue-200 mb-2">{num}</div>
            <h3 class="text-xl font-semibold text-slate-900 mb-2">{title}</h3>
            <p class="text-slate-600">{description}</p>
        </div>
    }
}

#[component]
fn FooterColumn(
    heading: &'static str,
    links: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-semibold text-white mb-4">{heading}</h4>
            <ul class="space-y-2 text-sm">
                {links
                    .iter()
                    .map(|(href, label)| view! {
                        <li>
                            <a href=*href class="hover:text-white transition">
                                {*label}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
