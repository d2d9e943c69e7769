//! 静态分类表：12 个分类 + 指示规则
//! 规则均针对 ASCII 小写化文本书写；弯引号（’）在字符类中显式兼容

use crate::core::{PatternRule, StageClass, TaxonomyCategory};

pub(crate) static CATEGORIES: [TaxonomyCategory; 12] = [
    TaxonomyCategory {
        code: "SCT-001",
        name: "Emotional Hijacking",
        description: "Exploiting affective processing to bypass rational evaluation",
        cyber_analog: "Urgency in phishing emails",
        cognitive_analog: "Outrage farming, fear-based messaging",
        indicators: &[
            "Strong emotional trigger (fear, anger, disgust, excitement)",
            "Call to immediate action before reflection",
            "Consequences framed as urgent or irreversible",
            "Emotional language disproportionate to content",
        ],
        stage_class: StageClass::Priming,
        default_severity_weight: 0.8,
        indicator_patterns: &[
            PatternRule::new(
                "urgency-marker",
                r"\b(?:urgent|urgently|immediately|act now|right now|breaking|just in|emergency)\b",
                0.35,
                &[
                    r"\b(?:record|ground|path|deal|jaw)[- ]?breaking\b",
                    r"\bbreaking (?:ground|the ice|bad|dawn|point|records?|up|down|in|out|even)\b",
                    r"\bemergency (?:room|services|contact|exit|department|medicine|kit|brake)\b",
                ],
            ),
            PatternRule::new(
                "intense-affect",
                r"\b(?:shocking|outrage|outrageous|horrifying|terrifying|devastating|disgusting|unbelievable|sickening)\b",
                0.35,
                &[],
            ),
            PatternRule::new(
                "irreversibility",
                r"(?:\bbefore it['’]?s too late\b|\blast chance\b|\byou won['’]?t believe\b|\bthis is not a drill\b)",
                0.5,
                &[],
            ),
        ],
    },
    TaxonomyCategory {
        code: "SCT-002",
        name: "Information Asymmetry Exploitation",
        description: "Leveraging what the target does not know",
        cyber_analog: "Zero-day exploits",
        cognitive_analog: "Selective disclosure, cherry-picked statistics",
        indicators: &[
            "Critical context omitted",
            "Statistics without denominators or timeframes",
            "Source material unavailable or paywalled",
            "Claims that cannot be independently verified",
        ],
        stage_class: StageClass::Exposure,
        default_severity_weight: 0.6,
        indicator_patterns: &[
            PatternRule::new(
                "uncited-research",
                r"\b(?:studies (?:show|prove|suggest|confirm)|research (?:shows|proves|confirms)|data (?:shows|proves)|experts (?:say|agree|warn)|scientists (?:say|agree|warn))\b",
                0.4,
                &[
                    r"\bdoi\b",
                    r"\bet al\b",
                    r"\bjournal of\b",
                    r"\bpublished in\b",
                    r"\(\d{4}\)",
                ],
            ),
            PatternRule::new(
                "anonymous-insider",
                r"\b(?:according to (?:sources|insiders|an? (?:anonymous|unnamed) source)|insiders (?:report|say|reveal)|sources (?:familiar with|close to))\b",
                0.45,
                &[],
            ),
            PatternRule::new(
                "hidden-knowledge",
                r"\b(?:what they(?:['’]re| are) not telling you|the real story|leaked (?:documents?|memo|files?|report))\b",
                0.45,
                &[],
            ),
        ],
    },
    TaxonomyCategory {
        code: "SCT-003",
        name: "Authority Fabrication",
        description: "Manufacturing trust signals the source does not legitimately possess",
        cyber_analog: "Certificate spoofing, credential theft",
        cognitive_analog: "Fake experts, astroturfing, credential inflation",
        indicators: &[
            "Credentials that cannot be verified",
            "Institutional affiliation without evidence",
            "Appeal to unnamed experts or studies",
            "Visual markers of authority (logos, formatting) without substance",
        ],
        stage_class: StageClass::Exposure,
        default_severity_weight: 0.7,
        indicator_patterns: &[
            PatternRule::new(
                "credential-inflation",
                r"\b(?:world[- ]renowned|world[- ]class|award[- ]winning|leading (?:expert|scientist|doctor|authority)|top (?:experts?|doctors?|scientists?)|prestigious)\b",
                0.35,
                &[],
            ),
            PatternRule::new(
                "unnamed-authority",
                r"\b(?:doctors (?:hate|recommend|agree)|(?:a|one) (?:harvard|stanford|oxford|mit) (?:doctor|scientist|professor|study)|experts (?:confirm|have confirmed))\b",
                0.45,
                &[],
            ),
            PatternRule::new(
                "title-drop",
                r"(?:\bdr\.\s|\bprofessor\b|\bph\.?d\b)",
                0.2,
                &[r"\buniversity of\b", r"\bdepartment of\b", r"\bfaculty\b"],
            ),
        ],
    },
    TaxonomyCategory {
        code: "SCT-004",
        name: "Social Proof Manipulation",
        description: "Weaponizing herd behavior and conformity instincts",
        cyber_analog: "Watering hole attacks, typosquatting popular sites",
        cognitive_analog: "Bot networks simulating consensus, fake reviews",
        indicators: &[
            "Claims about what 'everyone' thinks or does",
            "Manufactured engagement metrics",
            "Bandwagon framing ('join the movement')",
            "Artificial scarcity combined with popularity claims",
        ],
        stage_class: StageClass::Capture,
        default_severity_weight: 0.6,
        indicator_patterns: &[
            PatternRule::new(
                "consensus-claim",
                r"\b(?:everyone (?:knows|is|agrees)|everybody (?:knows|is)|most people (?:know|agree|already)|nobody believes)\b",
                0.45,
                &[],
            ),
            PatternRule::new(
                "mass-adoption",
                r"\b(?:millions (?:of people )?(?:have|are|already)|thousands (?:of people )?(?:have|are|already)|join (?:the )?[\d,]+|[\d,]+ (?:people|users|customers) (?:have )?already)\b",
                0.45,
                &[],
            ),
            PatternRule::new(
                "bandwagon",
                r"\b(?:join the movement|don['’]?t (?:miss out|get left behind)|trending|going viral|gone viral)\b",
                0.35,
                &[r"\btrending (?:topics? (?:page|tab|section)|down|up|upward|downward|higher|lower)\b"],
            ),
        ],
    },
    TaxonomyCategory {
        code: "SCT-005",
        name: "Identity Targeting",
        description: "Attacks calibrated to the target's self-concept and group affiliations",
        cyber_analog: "Targeted spearphishing using personal data",
        cognitive_analog: "Identity-based narrative capture, in-group/out-group exploitation",
        indicators: &[
            "Content addresses specific identity groups",
            "In-group/out-group framing",
            "Challenges to identity trigger defensive response",
            "Personalization based on known attributes",
        ],
        stage_class: StageClass::Capture,
        default_severity_weight: 0.7,
        indicator_patterns: &[
            PatternRule::new(
                "identity-address",
                r"\b(?:as an? (?:real |true |proud )?(?:american|patriot|christian|mother|father|parent|veteran|conservative|liberal|progressive|woman|man|engineer|gamer)|people like (?:you|us))\b",
                0.45,
                &[],
            ),
            PatternRule::new(
                "purity-test",
                r"\b(?:real|true) (?:patriots?|believers?|americans?|fans?|engineers?|men|women|christians?)\b",
                0.5,
                &[],
            ),
            PatternRule::new(
                "in-out-group",
                r"\b(?:us (?:vs\.?|versus) them|they hate (?:you|us)|your (?:generation|people|kind)|if you care about|anyone who (?:disagrees|supports|believes))\b",
                0.4,
                &[],
            ),
        ],
    },
    TaxonomyCategory {
        code: "SCT-006",
        name: "Temporal Manipulation",
        description: "Exploiting time pressure, temporal context, or scheduling",
        cyber_analog: "Session hijacking, time-based attacks",
        cognitive_analog: "News cycle exploitation, artificial deadlines, crisis amplification",
        indicators: &[
            "Artificial deadlines or expiration",
            "Exploitation of current events for unrelated agenda",
            "Time-limited offers or threats",
            "Strategic timing of information release",
        ],
        stage_class: StageClass::Priming,
        default_severity_weight: 0.6,
        indicator_patterns: &[
            PatternRule::new(
                "artificial-deadline",
                r"\b(?:only \d+ (?:hours?|days?|minutes?) left|expires? (?:today|tonight|soon|in \d+)|ends? (?:tonight|at midnight)|deadline (?:is )?(?:today|tonight|tomorrow)|within (?:the next )?\d+ hours)\b",
                0.45,
                &[r"\b(?:store|opening|business|office) hours\b"],
            ),
            PatternRule::new(
                "limited-time",
                r"\b(?:limited time|time is running out|running out of time|act fast|hurry|now or never|while (?:supplies|stocks) last)\b",
                0.4,
                &[],
            ),
            PatternRule::new(
                "account-threat",
                r"\b(?:will be (?:suspended|deleted|closed|terminated|locked) (?:in|within|unless)|verify (?:your account )?immediately)\b",
                0.55,
                &[],
            ),
            PatternRule::new(
                "crescendo-escalation",
                r"\b(?:now that we['’]?ve established|taking this a step further|(?:can you |let['’]?s )?go (?:a bit )?deeper|building on (?:that|this)|now suppose)\b",
                0.3,
                &[],
            )
            .with_min_hits(2),
        ],
    },
    TaxonomyCategory {
        code: "SCT-007",
        name: "Recursive Infection",
        description: "Self-replicating patterns where the target becomes the vector",
        cyber_analog: "Worms, supply chain attacks, training data poisoning",
        cognitive_analog: "Viral misinformation, memetic structures, wetiko patterns",
        indicators: &[
            "Strong compulsion to share before evaluating",
            "Content survives paraphrase (message persists in retelling)",
            "Multiple unconnected people arriving at identical framing",
            "Resistance to examining where the belief originated",
            "Sharing serves the operation regardless of agreement/disagreement",
        ],
        stage_class: StageClass::Propagation,
        default_severity_weight: 0.9,
        indicator_patterns: &[
            PatternRule::new(
                "share-compulsion",
                r"\b(?:share (?:this|it|before)|spread the word|tell everyone|retweet|pass (?:this|it) on|send this to)\b",
                0.6,
                &[
                    r"\bshare this (?:article|story|page|post|recipe|link)\b",
                    r"\bshare (?:this|it) (?:on|via) (?:facebook|twitter|x|linkedin|email|whatsapp)\b",
                ],
            ),
            PatternRule::new(
                "suppression-frame",
                r"\b(?:they don['’]?t want you to (?:know|see)|(?:the )?media won['’]?t (?:report|tell you|show)|before (?:they|it gets|it is|it['’]s) (?:delete|deleted|removed|taken down|banned|censored)|(?:being|been|got) (?:censored|banned|shadow[- ]?banned))\b",
                0.6,
                &[],
            ),
            PatternRule::new(
                "censorship-keyword",
                r"\b(?:censored|banned|suppressed)\b",
                0.25,
                &[r"\bbanned (?:substances?|books? week|list)\b", r"\bcensored (?:version|edit)\b"],
            ),
        ],
    },
    TaxonomyCategory {
        code: "SCT-008",
        name: "Direct Substrate Intervention",
        description: "Physical/electrical modification of neural hardware bypassing informational processing",
        cyber_analog: "Hardware implant, firmware rootkit",
        cognitive_analog: "Electrode stimulation, ECT depatterning, TMS, deep brain stimulation",
        indicators: &[
            "Behavioral changes with no corresponding informational input",
            "Subject confabulates explanations for externally-induced behaviors",
            "Cognitive changes following procedures exceeding stated scope",
            "Behavioral outputs inconsistent with stated beliefs, cause unidentifiable",
        ],
        stage_class: StageClass::Entrenchment,
        default_severity_weight: 0.9,
        indicator_patterns: &[
            PatternRule::new(
                "neural-intervention",
                r"\b(?:brain implant|neural implant|deep brain stimulation|electroconvulsive|electroshock|transcranial magnetic stimulation|neurostimulation)\b",
                0.35,
                &[r"\b(?:clinical trial|fda[- ]approved|peer[- ]reviewed|patients with)\b"],
            ),
            PatternRule::new(
                "depatterning",
                r"\b(?:depatterning|psychic driving|rewire (?:your|their) brain|reprogram (?:your|their) (?:brain|mind))\b",
                0.5,
                &[],
            ),
        ],
    },
    TaxonomyCategory {
        code: "SCT-009",
        name: "Chemical Substrate Disruption",
        description: "Pharmacological modification of neurochemical operating environment",
        cyber_analog: "Environmental manipulation, resource exhaustion attacks",
        cognitive_analog: "Psychoactive administration, engineered dopamine loops, cortisol spike induction",
        indicators: &[
            "Emotional response disproportionate to content (matches delivery mechanism, not information)",
            "Decision patterns consistent with altered neurochemical states",
            "Compulsive engagement patterns (doom scrolling, behavioral dopaminergic capture)",
            "Post-exposure cognitive state inconsistent with content consumed",
        ],
        stage_class: StageClass::Entrenchment,
        default_severity_weight: 0.8,
        indicator_patterns: &[
            PatternRule::new(
                "dopamine-loop",
                r"\b(?:dopamine (?:hit|rush|loop|fix)|endless scroll(?:ing)?|doom[- ]?scroll(?:ing)?|can['’]?t stop scrolling|addictive by design)\b",
                0.4,
                &[],
            ),
            PatternRule::new(
                "pharmacological",
                r"\b(?:slip (?:it|this) into|dose (?:them|him|her|the water)|microdos(?:e|ing) (?:to|for) (?:control|compliance)|chemical (?:compliance|restraint))\b",
                0.5,
                &[],
            ),
        ],
    },
    TaxonomyCategory {
        code: "SCT-010",
        name: "Sensory Channel Manipulation",
        description: "Control, denial, or overload of sensory input channels",
        cyber_analog: "DDoS, network isolation, man-in-the-middle",
        cognitive_analog: "Sensory deprivation, information overload, infinite scroll, algorithmic feed substitution",
        indicators: &[
            "Information environment completely controlled by single source",
            "Input volume exceeds processing capacity (notification flooding)",
            "Authentic information replaced with operator-controlled substitutes",
            "Subject unable to access alternative information sources",
        ],
        stage_class: StageClass::Entrenchment,
        default_severity_weight: 0.7,
        indicator_patterns: &[
            PatternRule::new(
                "single-source",
                r"\b(?:only trust (?:us|this (?:channel|source|page))|don['’]?t (?:listen to|trust|read) (?:anyone|anything) else|the only (?:source|channel) you need|ignore (?:all )?other (?:sources|news|media))\b",
                0.55,
                &[],
            ),
            PatternRule::new(
                "input-overload",
                r"\b(?:turn on (?:all )?notifications|never miss (?:a|an) (?:update|post|alert)|notification (?:flood|overload)|information overload)\b",
                0.3,
                &[],
            ),
        ],
    },
    TaxonomyCategory {
        code: "SCT-011",
        name: "Trust Infrastructure Destruction",
        description: "Targeted compromise of social trust networks to disable collective cognition",
        cyber_analog: "PKI compromise, certificate authority attack, DNS poisoning",
        cognitive_analog: "Bad-jacketing, institutional delegitimization, manufactured distrust",
        indicators: &[
            "Systematic discrediting of trust anchors (media, science, institutions)",
            "False flag operations attributed to trusted entities",
            "Manufactured evidence of betrayal within trust networks",
            "Generalized distrust promoted as sophisticated thinking",
        ],
        stage_class: StageClass::Entrenchment,
        default_severity_weight: 0.8,
        indicator_patterns: &[
            PatternRule::new(
                "institutional-delegitimization",
                r"\b(?:(?:mainstream|legacy|corporate) media (?:lies|is lying|is the enemy|can['’]?t be trusted)|fake news media|(?:scientists|doctors|experts|institutions) (?:are|were) (?:all )?(?:lying|bought|paid off|corrupt)|you can['’]?t trust (?:anyone|anything|the (?:government|media|science|experts)))\b",
                0.55,
                &[],
            ),
            PatternRule::new(
                "betrayal-frame",
                r"\b(?:false flag|they(?:['’]ve| have) been lying to you|inside job|trust no one|do your own research)\b",
                0.4,
                &[],
            ),
        ],
    },
    TaxonomyCategory {
        code: "SCT-012",
        name: "Commitment Escalation & Self-Binding",
        description: "Exploiting subject's own behavioral outputs as capture mechanisms",
        cyber_analog: "Ratchet exploit, privilege escalation through accumulated permissions",
        cognitive_analog: "Self-criticism sessions, loyalty tests, public commitment traps, sunk cost capture",
        indicators: &[
            "Sequential commitment requests escalating in cost",
            "Public declarations that create social binding",
            "Active participation requirements (vs passive consumption)",
            "Self-generated content used as evidence of genuine belief",
        ],
        stage_class: StageClass::Entrenchment,
        default_severity_weight: 0.7,
        indicator_patterns: &[
            PatternRule::new(
                "sunk-cost",
                r"\b(?:you(?:['’]ve| have) already (?:started|come|invested|committed|signed)|having come this far|can['’]?t (?:stop|quit|turn back) now|don['’]?t give up now)\b",
                0.45,
                &[],
            ),
            PatternRule::new(
                "public-pledge",
                r"\b(?:sign the (?:petition|pledge)|take the pledge|pledge your (?:support|loyalty)|publicly (?:commit|declare)|prove (?:your loyalty|you['’]re (?:loyal|a real)))\b",
                0.45,
                &[],
            ),
        ],
    },
];
