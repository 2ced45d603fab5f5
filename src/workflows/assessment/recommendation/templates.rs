use super::super::domain::StressClass;

/// Pre-written advice used whenever the external text-generation call is
/// unavailable or fails. One template per class, defined once as data.
const NO_STRESS_TEMPLATE: &str = "\
Your answers point to a calm, well-balanced period right now.

- Keep the routines that are working for you: regular sleep, movement, and time with people you trust.
- Check in with yourself every few weeks; catching changes early makes them easier to handle.
- Consider helping a classmate who seems overloaded - supporting others also protects your own wellbeing.";

const EUSTRESS_TEMPLATE: &str = "\
Your answers suggest a manageable, activating level of stress - the kind that can sharpen focus if you keep it in check.

- Break large assignments into small steps and plan recovery time after intense study blocks.
- Protect your sleep: a consistent schedule does more for stress than extra late-night studying.
- Keep up social contact and physical activity; both convert pressure into momentum.
- If the pressure starts feeling constant rather than occasional, revisit your workload with a mentor or advisor.";

const DISTRESS_TEMPLATE: &str = "\
Your answers indicate a heavy stress load that deserves real attention - you do not have to carry this alone.

- Please consider reaching out to a counselor, psychologist, or your student support service; professional help makes a measurable difference.
- Talk to someone you trust about how you are feeling; naming the load is the first step to reducing it.
- Reduce what you can right now: postpone non-essential commitments and ask instructors about deadline flexibility.
- Guard the basics - sleep, meals, and short daily walks - even when motivation is low.
- If you ever feel unsafe or overwhelmed, contact a crisis line or emergency services immediately.";

/// Static fallback text for a class.
pub fn fallback_text(class: StressClass) -> &'static str {
    match class {
        StressClass::NoStress => NO_STRESS_TEMPLATE,
        StressClass::Eustress => EUSTRESS_TEMPLATE,
        StressClass::Distress => DISTRESS_TEMPLATE,
    }
}
