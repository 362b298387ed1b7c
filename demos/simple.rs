use spam_lift::{classify_corpus_with_custom_config, Label, Message, PipelineConfig};
use spam_lift::DEFAULT_PIPELINE_CONFIG;

fn main() {
    env_logger::init();

    let messages = Message::from_labeled_texts(vec![
        (Label::Spam, "WINNER! Claim your free prize now, call 09061701461"),
        (Label::Ham, "Are we still on for lunch today?"),
        (Label::Spam, "Free entry to win cash. Text WIN to 87121"),
        (Label::Ham, "I'll call you when I get home"),
        (Label::Spam, "Your mobile won a £900 prize, call 09066362231 to claim"),
        (Label::Ham, "Can you text me the address? :)"),
        (Label::Spam, "Get $500 cash now at http://fastcash.biz"),
        (Label::Ham, "Thanks for the free tickets, see you at 8"),
    ]);

    let config = PipelineConfig {
        max_iterations: 100,
        ..DEFAULT_PIPELINE_CONFIG
    };

    match classify_corpus_with_custom_config(&messages, config) {
        Ok(report) => println!("{}", report),
        Err(e) => eprintln!("Error classifying corpus: {}", e),
    }
}
