pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #3B82F6;
  --primary-light: #60A5FA;
  --primary-dark: #2563EB;
  --accent: #8B5CF6;
  --error: #EF4444;

  /* Dark theme is the default */
  --background: #0F172A;
  --surface: #1E293B;
  --surface-raised: #273449;
  --text-primary: #F1F5F9;
  --text-secondary: #94A3B8;
  --border: #334155;
  --overlay: rgba(2, 6, 23, 0.85);

  /* Layout */
  --header-height: 64px;
  --container-width: 1100px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.3);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.4);

  /* Animation */
  --transition-normal: 250ms;
  --transition-slow: 1200ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Light theme, toggled by the class on the document root */
.light-theme {
  --background: #F3F4F6;
  --surface: #FFFFFF;
  --surface-raised: #F9FAFB;
  --text-primary: #111827;
  --text-secondary: #4B5563;
  --border: #E5E7EB;
  --overlay: rgba(17, 24, 39, 0.75);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}"#;
