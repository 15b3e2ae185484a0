//! Reply templates and number formatting for chat answers.

/// Reply when anything goes wrong while answering a chat message.
pub const ERROR_REPLY: &str =
    "Sorry, I encountered an error. Please try again with a valid currency conversion request.";

/// Reply when the model answers with nothing.
pub const INVALID_QUERY_REPLY: &str = "I can only help with currency conversions. Please ask me about converting between different currencies.";

/// Magnitude from which an `f64` has no fractional cents left to round.
const NO_CENTS_ABOVE: f64 = 4_503_599_627_370_496.0 / 100.0;

/// Round to two decimal places, sending exact halves to the even cent.
///
/// Values too large to carry cents (and non-finite values) come back as-is.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= NO_CENTS_ABOVE {
        return value;
    }

    let scaled = value * 100.0;
    let floor = scaled.floor();
    if scaled - floor != 0.5 {
        return scaled.round() / 100.0;
    }

    // `scaled` may only look like a tie because the product was rounded;
    // the exact product error says which side the true value is on.
    let error = value.mul_add(100.0, -scaled);
    let rounded = if error > 0.0 {
        floor + 1.0
    } else if error < 0.0 || floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    rounded / 100.0
}

/// Render a float the way a human-facing calculator would: integral values
/// keep one decimal (`100.0`), huge ones switch to exponent form (`9.2e+306`),
/// everything else uses the shortest exact form.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    if value.abs() >= 1e16 {
        let sci = format!("{:e}", value);
        return match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => sci,
        };
    }
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// The structured answer for a resolved conversion.
pub fn conversion_reply(amount: f64, from: &str, to: &str, rate: f64) -> String {
    let converted = format_number(round2(amount * rate));
    let amount = format_number(amount);
    let rate = format_number(rate);

    format!(
        "\nConverting {amount} {from} to {to}:\n\n\
         • Amount: {amount} {from}\n\
         • Exchange Rate: 1 {from} = {rate} {to}\n\
         • Converted Amount: {converted} {to}\n\n\
         Note: Exchange rates are updated in real-time and may vary slightly."
    )
}

/// Instructional prompt for the generative fallback.
pub fn fallback_prompt(message: &str) -> String {
    format!(
        "You are a currency conversion assistant. Provide a clear, structured response with:\n\
         - Greet the user\n\
         - Address their query: {message}\n\
         - If applicable, explain the conversion process\n\
         - Provide examples of valid queries\n\
         Keep the response focused on currency conversion topics."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(92.0), 92.0);
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(15130.0000001), 15130.0);
        assert_eq!(round2(-2.345678), -2.35);
    }

    #[test]
    fn test_round2_exact_halves_go_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.12);
        assert_eq!(round2(0.5 * 0.25), 0.12);
    }

    #[test]
    fn test_round2_near_halves_follow_the_stored_value() {
        // 1.115 and 2.675 are stored just below the half.
        assert_eq!(round2(1.115), 1.11);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(1.005), 1.0);
    }

    #[test]
    fn test_round2_large_and_non_finite_values_pass_through() {
        assert_eq!(round2(1e307), 1e307);
        assert_eq!(round2(1e307 * 0.92), 1e307 * 0.92);
        assert_eq!(round2(-1e300), -1e300);
        assert_eq!(round2(1e16 + 2.0), 1e16 + 2.0);
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
        assert!(round2(f64::NAN).is_nan());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0), "100.0");
        assert_eq!(format_number(0.92), "0.92");
        assert_eq!(format_number(151.305), "151.305");
        assert_eq!(format_number(-5.0), "-5.0");
        assert_eq!(format_number(0.0), "0.0");
    }

    #[test]
    fn test_format_number_huge_values() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(9.2e306), "9.2e+306");
        assert_eq!(format_number(-1e20), "-1e+20");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn test_conversion_reply_huge_amount() {
        let reply = conversion_reply(1e307, "USD", "EUR", 0.92);
        assert!(reply.contains("Converting 1e+307 USD to EUR:"));
        assert!(reply.contains("Converted Amount: 9.2e+306 EUR"));
        assert!(!reply.contains("inf"));
    }

    #[test]
    fn test_conversion_reply_template() {
        let reply = conversion_reply(100.0, "USD", "EUR", 0.92);
        let expected = "\nConverting 100.0 USD to EUR:\n\n\
                        • Amount: 100.0 USD\n\
                        • Exchange Rate: 1 USD = 0.92 EUR\n\
                        • Converted Amount: 92.0 EUR\n\n\
                        Note: Exchange rates are updated in real-time and may vary slightly.";
        assert_eq!(reply, expected);
    }

    #[test]
    fn test_conversion_reply_rounds_converted_only() {
        let reply = conversion_reply(3.0, "GBP", "JPY", 191.456);
        assert!(reply.contains("1 GBP = 191.456 JPY"));
        assert!(reply.contains("Converted Amount: 574.37 JPY"));
    }

    #[test]
    fn test_fallback_prompt_embeds_message() {
        let prompt = fallback_prompt("hello there");
        assert!(prompt.starts_with("You are a currency conversion assistant."));
        assert!(prompt.contains("- Address their query: hello there\n"));
        assert!(prompt.ends_with("Keep the response focused on currency conversion topics."));
    }
}
