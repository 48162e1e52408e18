/// Stylesheet injected by [`crate::presentation::App`]. Colours are HSL
/// triplets so the `.dark` block only has to swap variables.
pub const DASHBOARD_CSS: &str = r#"
:root {
    --background: 0 0% 100%;
    --foreground: 222 47% 11%;
    --card: 0 0% 100%;
    --muted: 210 40% 96%;
    --muted-foreground: 215 16% 47%;
    --border: 214 32% 91%;
    --primary: 221 83% 53%;
    --primary-foreground: 0 0% 100%;
    --accent: 262 83% 58%;
    --success: 142 71% 40%;
    --danger: 0 72% 51%;
    --chart-1: 221 83% 53%;
    --chart-2: 262 83% 58%;
    --chart-3: 142 71% 45%;
    --chart-4: 38 92% 50%;
    --chart-5: 0 72% 51%;
}

.dark {
    --background: 222 47% 7%;
    --foreground: 210 40% 98%;
    --card: 222 40% 11%;
    --muted: 217 33% 17%;
    --muted-foreground: 215 20% 65%;
    --border: 217 33% 20%;
    --primary: 217 91% 60%;
    --accent: 263 70% 65%;
    --chart-1: 217 91% 60%;
    --chart-2: 263 70% 65%;
    --chart-3: 142 69% 50%;
    --chart-4: 38 92% 55%;
    --chart-5: 0 84% 60%;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
    background: hsl(var(--background));
    color: hsl(var(--foreground));
    transition: background 0.2s ease, color 0.2s ease;
}

.muted { color: hsl(var(--muted-foreground)); font-size: 0.875rem; }

.text-gradient {
    background: linear-gradient(135deg, hsl(var(--primary)), hsl(var(--accent)));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.splash {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 8px;
}

.splash-orb {
    width: 64px;
    height: 64px;
    border-radius: 50%;
    background: linear-gradient(135deg, hsl(var(--primary)), hsl(var(--accent)));
    animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse { 50% { opacity: 0.5; transform: scale(0.92); } }

.dashboard { display: flex; min-height: 100vh; }

.sidebar {
    width: 260px;
    flex-shrink: 0;
    border-right: 1px solid hsl(var(--border));
    background: hsl(var(--card));
    padding: 24px 16px;
}

.brand { display: flex; align-items: center; gap: 12px; margin-bottom: 24px; }
.brand-mark {
    width: 40px; height: 40px; border-radius: 10px;
    display: flex; align-items: center; justify-content: center;
    background: linear-gradient(135deg, hsl(var(--primary)), hsl(var(--accent)));
}
.brand h1 { font-size: 1.1rem; margin: 0; }

.menu { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 4px; }
.menu-button {
    width: 100%;
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 10px 12px;
    border: 0;
    border-radius: 8px;
    background: transparent;
    color: inherit;
    font: inherit;
    cursor: pointer;
    text-align: left;
}
.menu-button:hover { background: hsl(var(--muted)); }
.menu-button.active {
    background: hsl(var(--primary));
    color: hsl(var(--primary-foreground));
    box-shadow: 0 0 16px hsl(var(--primary) / 0.35);
}

.dashboard-main { flex: 1; min-width: 0; }

.topbar {
    position: sticky;
    top: 0;
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 24px;
    border-bottom: 1px solid hsl(var(--border));
    background: hsl(var(--background) / 0.85);
    backdrop-filter: blur(8px);
}
.topbar-status { display: flex; align-items: center; gap: 8px; }

.theme-toggle {
    width: 40px; height: 40px;
    border-radius: 50%;
    border: 1px solid hsl(var(--border));
    background: transparent;
    cursor: pointer;
    font-size: 1.1rem;
}

.main-content { max-width: 1280px; margin: 0 auto; padding: 32px 24px; display: flex; flex-direction: column; gap: 32px; }

.page-header h1 { font-size: 2rem; margin: 0 0 4px; }

.metric-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 24px; }

.card {
    border: 1px solid hsl(var(--border));
    border-radius: 12px;
    background: hsl(var(--card));
    padding: 20px;
}
.card-header h3 { margin: 0 0 4px; font-size: 1.05rem; }
.card-body { margin-top: 16px; }

.metric-title { font-size: 0.875rem; color: hsl(var(--muted-foreground)); }
.metric-value { font-size: 1.75rem; font-weight: 700; margin: 8px 0; }
.metric-footer { display: flex; gap: 8px; align-items: baseline; }
.trend-up { color: hsl(var(--success)); }
.trend-down { color: hsl(var(--danger)); }
.trend-stable { color: hsl(var(--muted-foreground)); }

.badge { display: inline-block; padding: 2px 10px; border-radius: 999px; font-size: 0.75rem; font-weight: 600; }
.badge-outline { border: 1px solid hsl(var(--border)); }
.badge-live { background: linear-gradient(135deg, hsl(var(--primary)), hsl(var(--accent))); color: white; }
.badge-up { background: hsl(var(--success) / 0.15); color: hsl(var(--success)); }
.badge-down { background: hsl(var(--danger) / 0.15); color: hsl(var(--danger)); }
.badge-accent { background: hsl(var(--accent) / 0.15); color: hsl(var(--accent)); }

.tab-bar { display: inline-flex; gap: 4px; padding: 4px; border-radius: 10px; background: hsl(var(--muted)); flex-wrap: wrap; }
.tab { border: 0; background: transparent; color: inherit; padding: 6px 14px; border-radius: 8px; cursor: pointer; font: inherit; }
.tab.active { background: hsl(var(--card)); box-shadow: 0 1px 3px rgb(0 0 0 / 0.15); }

.chart-svg { width: 100%; height: auto; overflow: visible; }
.chart-grid line { stroke: hsl(var(--border)); stroke-dasharray: 3 3; }
.tick { fill: hsl(var(--muted-foreground)); font-size: 11px; }
.chart-legend { display: flex; flex-wrap: wrap; gap: 12px; list-style: none; padding: 0; margin: 12px 0 0; font-size: 0.8rem; }
.swatch { display: inline-block; width: 10px; height: 10px; border-radius: 2px; margin-right: 6px; }
.chart-donut { display: flex; align-items: center; gap: 24px; }
.chart-donut .chart-svg { max-width: 260px; }
.chart-donut .chart-legend { flex-direction: column; }

.share-row { display: flex; flex-direction: column; gap: 6px; margin-bottom: 14px; }
.share-row-head { display: flex; justify-content: space-between; font-size: 0.875rem; }
.share-track { height: 8px; border-radius: 999px; background: hsl(var(--muted)); overflow: hidden; }
.share-fill { height: 100%; border-radius: 999px; transition: width 0.4s ease; }

.table-wrap { overflow-x: auto; }
.data-table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
.data-table th { text-align: left; color: hsl(var(--muted-foreground)); font-weight: 500; }
.data-table th, .data-table td { padding: 10px 12px; border-bottom: 1px solid hsl(var(--border)); }

.insight { display: flex; gap: 12px; align-items: flex-start; margin-bottom: 12px; }
.insight-list { margin: 4px 0 12px; padding-left: 18px; }

.filters { display: flex; flex-wrap: wrap; gap: 12px; }
.filters input, .filters select {
    padding: 8px 12px;
    border-radius: 8px;
    border: 1px solid hsl(var(--border));
    background: hsl(var(--card));
    color: inherit;
    font: inherit;
}
.filters input { flex: 1; min-width: 240px; }

.dataset { border-bottom: 1px solid hsl(var(--border)); padding: 14px 0; }
.dataset:last-child { border-bottom: 0; }
.dataset-meta { display: flex; flex-wrap: wrap; gap: 12px; font-size: 0.8rem; color: hsl(var(--muted-foreground)); margin-top: 6px; }
.tags { display: flex; flex-wrap: wrap; gap: 6px; margin-top: 8px; }

code.endpoint { font-family: ui-monospace, monospace; background: hsl(var(--muted)); padding: 2px 6px; border-radius: 4px; }

@media (max-width: 900px) {
    .sidebar { display: none; }
    .card-grid { grid-template-columns: 1fr; }
}
"#;
