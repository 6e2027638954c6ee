// Built-in outreach template. Used whenever a request does not supply its own.

pub const DEFAULT_SUBJECT: &str = "Quick VC networking chat?";

pub const DEFAULT_BODY: &str = r#"Hi {{Name}},

Hope you're doing well. I'm {{SenderName}} from {{SenderFirm}}. We write $1–3M seed and early-stage checks into B2B vertical-AI companies in legacy industries such as healthcare, legal, and fintech, and we currently hold several active board seats.

I'd love to introduce myself, hear more about your {{Focus}} at {{Firm}}, and swap notes on your pipeline.

Would you be open to chatting sometime in the next couple of weeks?

Best,
{{SenderName}}
{{SenderTitle}}
{{SenderFirm}}
{{SenderEmail}}

[Unsubscribe] | {{SenderAddress}}"#;
