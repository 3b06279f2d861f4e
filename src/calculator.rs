use crate::constants::*;
use crate::dom;
use smokefield_core::{parse_principal, LoanTerms, NumberFormat, Term};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Live binding between the calculator form and [`LoanTerms::quote`].
struct CalculatorBinding {
    document: web::Document,
    amount: web::HtmlInputElement,
    slider: Option<web::HtmlInputElement>,
    result_box: web::Element,
    terms: LoanTerms,
    selected: Cell<Term>,
    format: NumberFormat,
}

impl CalculatorBinding {
    fn update(&self) {
        let principal = parse_principal(&self.amount.value());
        let Some(quote) = self.terms.quote(principal, self.selected.get()) else {
            _ = self.result_box.class_list().remove_1(VISIBLE_CLASS);
            return;
        };
        let text = quote.formatted(&self.format);
        self.set_text(LOAN_MONTHLY_ID, &format!("{}{}", text.monthly_payment, PER_MONTH_SUFFIX));
        self.set_text(LOAN_PRINCIPAL_ID, &format!("{}{}", text.principal, CURRENCY_SUFFIX));
        self.set_text(LOAN_INTEREST_ID, &format!("{}{}", text.total_interest, CURRENCY_SUFFIX));
        self.set_text(LOAN_TOTAL_ID, &format!("{}{}", text.total_payment, CURRENCY_SUFFIX));
        _ = self.result_box.class_list().add_1(VISIBLE_CLASS);
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

fn sync_slider_fill(slider: &web::HtmlInputElement) {
    let min = parse_principal(&slider.min()).unwrap_or(0.0);
    let max = parse_principal(&slider.max()).unwrap_or(100.0);
    let val = parse_principal(&slider.value()).unwrap_or(min);
    let pct = if max > min {
        ((val - min) / (max - min) * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    let background = format!(
        "linear-gradient(to right, {SLIDER_FILL} 0%, {SLIDER_FILL} {pct}%, {SLIDER_TRACK} {pct}%, {SLIDER_TRACK} 100%)"
    );
    _ = slider.style().set_property("background", &background);
}

/// Wire the loan calculator if the page has one; a no-op otherwise.
pub fn wire(document: &web::Document) {
    let amount: Option<web::HtmlInputElement> = dom::element_by_id(document, LOAN_AMOUNT_ID);
    let result_box = document.get_element_by_id(LOAN_RESULT_ID);
    let (Some(amount), Some(result_box)) = (amount, result_box) else {
        log::debug!("[calc] no calculator on this page");
        return;
    };
    let terms = LoanTerms::default();
    let selected = match terms.default_term() {
        Ok(t) => t,
        Err(e) => {
            log::warn!("[calc] {}", e);
            return;
        }
    };
    let binding = Rc::new(CalculatorBinding {
        document: document.clone(),
        amount,
        slider: dom::element_by_id(document, LOAN_SLIDER_ID),
        result_box,
        terms,
        selected: Cell::new(selected),
        format: NumberFormat::RO,
    });

    if let Some(slider) = &binding.slider {
        sync_slider_fill(slider);

        let b = binding.clone();
        dom::listen(slider, "input", false, move |_ev: web::Event| {
            if let Some(slider) = &b.slider {
                b.amount.set_value(&slider.value());
                sync_slider_fill(slider);
            }
            b.update();
        });

        let b = binding.clone();
        dom::listen(&binding.amount, "input", false, move |_ev: web::Event| {
            if let Some(slider) = &b.slider {
                let typed = parse_principal(&b.amount.value()).unwrap_or(0.0);
                let clamped = b.terms.clamp_principal(typed.trunc());
                slider.set_value(&format!("{}", clamped as i64));
                sync_slider_fill(slider);
            }
            b.update();
        });
    } else {
        let b = binding.clone();
        dom::listen(&binding.amount, "input", false, move |_ev: web::Event| b.update());
    }

    wire_duration_buttons(document, &binding);

    if binding
        .slider
        .as_ref()
        .is_some_and(|s| !s.value().is_empty())
    {
        binding.update();
    }
    log::info!("[calc] calculator ready");
}

fn duration_buttons(document: &web::Document) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(DURATION_BUTTON_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

fn wire_duration_buttons(document: &web::Document, binding: &Rc<CalculatorBinding>) {
    let buttons = Rc::new(duration_buttons(document));
    for button in buttons.iter() {
        let b = binding.clone();
        let all = buttons.clone();
        let this = button.clone();
        dom::listen(button, "click", false, move |_ev: web::Event| {
            let months = this
                .get_attribute(DURATION_MONTHS_ATTR)
                .and_then(|m| m.trim().parse::<u32>().ok())
                .unwrap_or(0);
            match b.terms.term(months) {
                Ok(term) => {
                    for other in all.iter() {
                        _ = other.class_list().remove_1(ACTIVE_CLASS);
                    }
                    _ = this.class_list().add_1(ACTIVE_CLASS);
                    b.selected.set(term);
                    b.update();
                }
                Err(e) => log::warn!("[calc] {}", e),
            }
        });
    }
}
