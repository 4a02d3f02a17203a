//! Global CSS styles for Pulseboard.
//!
//! Sizes, spacing and typography of the dashboard. Theme colors are
//! applied inline from the active palette.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Radii */
  --radius-card: 12px;

  /* Typography */
  --font-sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

/* === Screen === */
.dashboard {
  position: relative;
  height: 100vh;
  overflow: hidden;
}

.dashboard__scroll {
  height: 100%;
  overflow-y: auto;
}

/* === Status Bar (translucent, transparent) === */
.status-bar {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  height: 24px;
  z-index: 20;
  background: transparent;
  pointer-events: none;
}

.status-bar--dark-content { color: #000; }
.status-bar--light-content { color: #FFF; }

/* === Collapsing Header === */
.collapsing-header {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  z-index: 10;
  overflow: hidden;
  display: flex;
  justify-content: center;
  align-items: center;
}

.collapsing-header__content {
  padding-top: 50px;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.collapsing-header__title {
  font-size: 32px;
  font-weight: bold;
  color: #FFF;
  margin-bottom: 8px;
}

.collapsing-header__subtitle {
  font-size: 16px;
  color: rgba(255, 255, 255, 0.8);
}

/* === Profile Block === */
.profile-block {
  display: flex;
  flex-direction: row;
  align-items: center;
  margin-bottom: 30px;
}

.profile-block__avatar {
  width: 60px;
  height: 60px;
  border-radius: 30px;
  margin-right: 16px;
  border-width: 2px;
  border-style: solid;
  object-fit: cover;
}

.profile-block__greeting {
  font-size: 16px;
  margin-bottom: 4px;
}

.profile-block__name {
  font-size: 20px;
  font-weight: bold;
}

.section-heading {
  font-size: 22px;
  font-weight: bold;
  margin-top: 24px;
  margin-bottom: 16px;
}

/* === Feature Card === */
.feature-card {
  margin-bottom: 20px;
  border-radius: var(--radius-card);
  padding: 20px;
  will-change: transform;
}

.feature-card__touchable {
  cursor: pointer;
  user-select: none;
  touch-action: manipulation;
}

.feature-card__title {
  font-size: 20px;
  font-weight: 600;
  margin-bottom: 8px;
}

.feature-card__body {
  font-size: 16px;
  line-height: 24px;
}

/* === Stats Row === */
.stats-row {
  display: flex;
  flex-direction: row;
  justify-content: space-between;
  margin-top: 20px;
}

.stat-tile {
  border-radius: var(--radius-card);
  padding: 16px;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
}

.stat-tile__value {
  font-size: 24px;
  font-weight: bold;
  margin-bottom: 4px;
}

.stat-tile__label {
  font-size: 14px;
}
"#;
