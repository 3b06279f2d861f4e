// Page wiring and frame scheduling constants for the web front-end.
// Kept free of crate imports so host-side tests can `include!` this file.

// Element lookup
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const HERO_SECTION_SELECTOR: &str = ".hero"; // pointer is tracked over the whole section
pub const BACKDROP_CANVAS_ID: &str = "smokeCanvas";
pub const SCENE_ATTR: &str = "data-scene"; // optional preset override on the canvas

// Resize handling
pub const RESIZE_DEBOUNCE_MS: i32 = 200; // quiet period before re-seeding

// Frame statistics
pub const STATS_INTERVAL_SEC: f32 = 5.0;

// Backdrop canvas styling
pub const BACKDROP_STYLE: &str =
    "position:fixed;top:0;left:0;width:100%;height:100%;pointer-events:none;z-index:0";

// Loan calculator elements
pub const LOAN_AMOUNT_ID: &str = "loanAmount";
pub const LOAN_SLIDER_ID: &str = "amountSlider";
pub const LOAN_RESULT_ID: &str = "resultBox";
pub const LOAN_MONTHLY_ID: &str = "monthlyRate";
pub const LOAN_PRINCIPAL_ID: &str = "totalAmount";
pub const LOAN_INTEREST_ID: &str = "totalInterest";
pub const LOAN_TOTAL_ID: &str = "totalPayment";
pub const DURATION_BUTTON_SELECTOR: &str = ".duration-btn";
pub const DURATION_MONTHS_ATTR: &str = "data-months";
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";

// Loan calculator presentation
pub const CURRENCY_SUFFIX: &str = " lei";
pub const PER_MONTH_SUFFIX: &str = " lei/lună";
pub const SLIDER_FILL: &str = "#D4AF37";
pub const SLIDER_TRACK: &str = "rgba(255,255,255,0.1)";
