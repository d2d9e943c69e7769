//! 接种模板库（按分类编码）
//! 思路：暴露机制本身，而非给出反驳论点

/// 单条静态模板
#[derive(Debug, Clone, Copy)]
pub struct InoculationTemplate {
    pub code: &'static str,
    /// 段落之间以空行分隔
    pub mechanism_exposure: &'static str,
    pub recognition_triggers: &'static [&'static str],
    pub weakened_example: &'static str,
}

pub static TEMPLATES: [InoculationTemplate; 12] = [
    InoculationTemplate {
        code: "SCT-001",
        mechanism_exposure: "This content is designed to trigger an emotional response (urgency, fear, \
outrage) that bypasses your rational evaluation. The emotional trigger IS the attack, not the content \
itself. When you feel a strong compulsion to act immediately after reading something, that compulsion \
is the technique working as intended.\n\n\
The defense: notice the emotion. Name it. Then ask: 'What happens if I wait 30 minutes before acting?' \
If the answer is 'nothing changes,' the urgency was manufactured. Legitimate urgent information does not \
need emotional amplification to convey urgency; the facts alone suffice.",
        recognition_triggers: &[
            "Notice when content makes you feel before it makes you think",
            "Ask: 'Would this message change if the emotional language was removed?'",
            "Implement a 30-minute delay before acting on emotionally compelling content",
            "Distinguish between content that informs you of urgency vs content that manufactures urgency",
        ],
        weakened_example: "Example of SCT-001 in action: 'BREAKING: You need to see this NOW before they \
take it down!' Notice the urgency ('NOW'), the scarcity ('before they take it down'), and the implied \
conspiracy ('they'). None of these relate to the actual content. They are delivery mechanisms for the \
emotional payload.",
    },
    InoculationTemplate {
        code: "SCT-002",
        mechanism_exposure: "This content leverages information you don't have (unverifiable sources, \
paywalled studies, anonymous experts) to make claims you cannot independently evaluate. The asymmetry IS \
the technique. If you could verify the claim, the manipulation would fail.\n\n\
The defense: when a claim cites authority you cannot check, treat it as hypothesis rather than fact. The \
phrase 'studies show' without a specific citation is a trust signal, not evidence. Demand the DOI, the \
dataset, the named source. If it cannot be provided, the information asymmetry is intentional.",
        recognition_triggers: &[
            "Ask: 'Can I verify this claim from the primary source right now?'",
            "Treat 'studies show' without citation as a red flag, not evidence",
            "Notice when content relies on what you CAN'T check rather than what you CAN",
            "Distinguish between 'I don't know if this is true' and 'This is probably true'",
        ],
        weakened_example: "Example of SCT-002 in action: 'Leading researchers at a prestigious institution \
have found...' Which researchers? Which institution? Which publication? The vagueness is not sloppiness; \
it is design. Specific claims can be checked. Vague claims can only be trusted or rejected.",
    },
    InoculationTemplate {
        code: "SCT-003",
        mechanism_exposure: "This content manufactures trust signals (credentials, institutional \
affiliations, visual authority markers) that the source does not legitimately possess. Your cognitive \
substrate is designed to trust authority; this design is the vulnerability surface.\n\n\
The defense: separate the trust signal from the claim. A person with a PhD speaking outside their field \
has no more authority than anyone else. A website with professional design has no more credibility than \
a plain text page. Evaluate the claim, not the claimant.",
        recognition_triggers: &[
            "Ask: 'Would I believe this if it came from an anonymous source?'",
            "Check credentials against the specific claim being made",
            "Notice when authority markers (titles, logos, formatting) are doing more work than evidence",
            "Distinguish between 'this person has authority' and 'this claim is supported'",
        ],
        weakened_example: "Example of SCT-003 in action: A deepfake video of a political leader endorsing \
a product. The visual authority (the face, the voice) is fabricated. Your substrate authenticates the \
person, not the message. The defense is to authenticate the MESSAGE through independent channels, not the \
person through biometric recognition.",
    },
    InoculationTemplate {
        code: "SCT-004",
        mechanism_exposure: "This content exploits your instinct to follow the crowd: manufactured \
engagement metrics, astroturfed consensus, bandwagon framing. When you see 'millions of people \
already...' your substrate registers social validation before evaluating the underlying claim.\n\n\
The defense: social proof is a heuristic, not evidence. Millions of people can be wrong. Engagement \
metrics can be purchased. Consensus can be manufactured by a small number of coordinated actors. Ask: \
'Is this popular because it's true, or does it appear true because it's popular?'",
        recognition_triggers: &[
            "Ask: 'Would this be compelling if no one else believed it?'",
            "Treat engagement metrics as potentially manipulated by default",
            "Notice when 'everyone thinks X' is substituted for evidence that X is true",
            "Distinguish between genuine consensus and manufactured consensus",
        ],
        weakened_example: "Example of SCT-004 in action: 'Join the 500,000 people who have already...' \
The number is the argument. Not evidence, not reasoning, not data. Just a large number designed to make \
non-participation feel like deviation from the norm.",
    },
    InoculationTemplate {
        code: "SCT-005",
        mechanism_exposure: "This content is calibrated to your self-concept: your group affiliations, \
your values, your sense of who you are. It frames the message so that accepting it validates your \
identity and rejecting it threatens it. This makes rational evaluation feel like self-betrayal.\n\n\
The defense: notice when a message makes you feel that disagreement would mean you are not who you think \
you are. That feeling is the technique working. Your identity is not contingent on any single belief. You \
can evaluate a claim without it defining you.",
        recognition_triggers: &[
            "Ask: 'Does rejecting this claim feel like a threat to who I am?'",
            "Notice 'As a [identity], you should...' framing",
            "Separate 'I believe X' from 'I am the kind of person who believes X'",
            "When disagreement feels personal rather than intellectual, identity targeting is active",
        ],
        weakened_example: "Example of SCT-005 in action: 'Real engineers know that...' If you're an \
engineer, rejecting the claim now means you're not a 'real' engineer. The identity frame converts an \
evaluable claim into an identity test.",
    },
    InoculationTemplate {
        code: "SCT-006",
        mechanism_exposure: "This content exploits time (artificial deadlines, crisis framing, strategic \
timing) to compress your evaluation window. When you believe you must decide NOW, the time constraint \
itself prevents the analysis that would reveal the manipulation.\n\n\
The defense: almost nothing is as urgent as it claims to be. When content insists you must act before a \
deadline, ask: 'Who set this deadline and who benefits from my haste?' Legitimate time-sensitive \
information provides context for the timeline. Manufactured urgency provides only the deadline.",
        recognition_triggers: &[
            "Ask: 'Who benefits from me deciding quickly?'",
            "Treat artificial deadlines as manipulation signals",
            "Notice when 'limited time' is the primary motivator rather than the content itself",
            "Implement a personal policy: the more urgent something feels, the longer you wait",
        ],
        weakened_example: "Example of SCT-006 in action: A phishing email that says 'Your account will be \
suspended in 24 hours unless you verify immediately.' The deadline is the attack. Remove the deadline and \
the content has no power.",
    },
    InoculationTemplate {
        code: "SCT-007",
        mechanism_exposure: "This content is engineered so that YOU become the distribution mechanism. \
The compulsion to share, whether from agreement, outrage, or the desire to debunk, serves the operation \
regardless of your intent. Sharing IS the payload delivery, not the content itself.\n\n\
The defense: when you feel compelled to share something, that compulsion is the infection vector. Ask: \
'Am I sharing this because it genuinely serves my audience, or because the content has triggered a \
redistribution reflex?' If you cannot answer honestly, do not share.",
        recognition_triggers: &[
            "Notice when you feel an urgent compulsion to share before fully processing",
            "Ask: 'Does sharing this serve my audience or the content creator?'",
            "Recognize that outrage-sharing and agreement-sharing produce the same amplification",
            "If you can't trace where you first encountered a belief, flag it for review",
        ],
        weakened_example: "Example of SCT-007 in action: 'They don't want you to know this; share before \
it gets deleted!' The censorship frame converts every share into an act of resistance. The sharer feels \
brave. The operation feels amplified. Both are correct. The bravery is real. So is the exploitation.",
    },
    InoculationTemplate {
        code: "SCT-008",
        mechanism_exposure: "This technique skips persuasion entirely. Instead of changing what you are \
told, it changes the hardware that does the evaluating: electrical stimulation, implants, or procedures \
that alter cognition directly. Because no argument is involved, the subject often invents reasons for \
behavior that was induced from outside.\n\n\
The defense: track your own baseline. When your preferences or judgments shift after a procedure and you \
cannot point to any new information that caused the shift, treat the change as a symptom to investigate \
rather than a conclusion you reached.",
        recognition_triggers: &[
            "Ask: 'What new information changed my mind, and when did I receive it?'",
            "Notice explanations you construct after the fact for behavior you did not plan",
            "Get independent review of any procedure whose cognitive effects exceed its stated scope",
            "Keep a written record of your positions before and after medical or neural interventions",
        ],
        weakened_example: "Example of SCT-008 in action: 'This session will rewire your brain so the old \
doubts simply stop.' The promise is not to convince you of anything. It is to remove the part of you that \
would have asked questions.",
    },
    InoculationTemplate {
        code: "SCT-009",
        mechanism_exposure: "This technique alters the chemical environment your reasoning runs in. \
Engineered reward loops, stimulant timing, and stress induction shift how strongly you react, independent \
of what you are reacting to. The response you feel belongs to the delivery mechanism, not the \
information.\n\n\
The defense: compare the strength of your reaction with the substance of the content. If a feed leaves you \
agitated or compelled to keep scrolling while you cannot recall anything it said, the chemistry was the \
product.",
        recognition_triggers: &[
            "Ask: 'Is my reaction proportionate to what this actually said?'",
            "Notice compulsive return patterns (one more scroll, one more refresh)",
            "Check your state after exposure against what you consumed",
            "Treat engineered variable rewards (likes, streaks, loot drops) as a control channel",
        ],
        weakened_example: "Example of SCT-009 in action: An app that withholds notifications for hours and \
then releases them in a burst. Nothing in the messages is urgent; the irregular timing is the dopamine \
lever that keeps you checking.",
    },
    InoculationTemplate {
        code: "SCT-010",
        mechanism_exposure: "This technique controls what reaches you rather than arguing with you. It \
either floods your inputs until you cannot process them, or narrows them until a single operator-controlled \
channel is all you see. In both cases your conclusions are bounded by what was allowed through.\n\n\
The defense: audit your information diet. If one feed, one channel, or one community supplies nearly \
everything you know about a topic, your picture of that topic is whatever that source decided to show you.",
        recognition_triggers: &[
            "Ask: 'Where else could I learn about this, and have I checked?'",
            "Notice instructions to ignore or distrust every other source",
            "Reduce input volume until you can actually evaluate what arrives",
            "Treat algorithmic feeds as an editor with its own agenda",
        ],
        weakened_example: "Example of SCT-010 in action: 'Don't listen to anyone else. This channel is the \
only source you need.' The claim is not about any fact. It is a request to close every other channel so \
this one has no competition.",
    },
    InoculationTemplate {
        code: "SCT-011",
        mechanism_exposure: "This technique attacks the infrastructure people use to decide what to trust: \
journalists, scientists, institutions, and each other. Once every trust anchor is discredited, collective \
verification stops working and the operator becomes the only remaining voice.\n\n\
The defense: distinguish specific criticism from blanket distrust. Specific criticism names an error and \
offers evidence. Blanket distrust ('trust no one', 'they are all lying') offers nothing to check and \
usually points you toward one replacement authority.",
        recognition_triggers: &[
            "Ask: 'If I distrust everyone named here, who is left to believe?'",
            "Notice generalized distrust presented as sophistication",
            "Look for evidence attached to accusations of betrayal",
            "Treat sudden 'revelations' about a trusted party as claims to verify, not facts",
        ],
        weakened_example: "Example of SCT-011 in action: 'Doctors are all paid off. Do your own research.' \
No specific doctor, payment, or study is named. The sentence removes a trust anchor and leaves the \
reader with nothing but the speaker.",
    },
    InoculationTemplate {
        code: "SCT-012",
        mechanism_exposure: "This technique turns your own actions into the capture mechanism. Each small \
commitment (a click, a signature, a public statement) raises the cost of stepping back, because reversing \
course now means admitting the earlier steps were mistakes.\n\n\
The defense: evaluate each request on its own merits. What you already invested is gone whether or not \
you continue. A public pledge you were asked to make is evidence of the request, not evidence that the \
cause is right.",
        recognition_triggers: &[
            "Ask: 'Would I agree to this if it were the first thing asked of me?'",
            "Notice requests that escalate in cost one step at a time",
            "Be wary of demands to declare loyalty publicly",
            "Treat 'you've come this far' as a sunk-cost appeal, not a reason",
        ],
        weakened_example: "Example of SCT-012 in action: 'You've already signed up. Having come this far, \
take the pledge and share your commitment.' Each step is small, and each makes the next one harder to \
refuse.",
    },
];
