//! 内置葡萄牙语 → 英语词表
//!
//! 键必须与页面上去除首尾空白后的文本完全一致。

pub const PT_EN: &[(&str, &str)] = &[
    // 导航菜单
    ("Estética Avançada", "Advanced Aesthetics"),
    ("Cirurgias Corporais", "Body Surgery"),
    ("Cirurgias Faciais", "Facial Surgery"),
    ("Ginecologia", "Gynecology"),
    ("Tecnologias", "Technologies"),
    ("Clínicas", "Clinics"),
    ("Antes e Depois", "Before and After"),
    ("Buscar...", "Search..."),

    // 主标题
    ("QUAL O SEU OBJETIVO?", "WHAT IS YOUR GOAL?"),
    ("Harmonizar", "Harmonize"),
    ("Prevenir", "Prevent"),
    ("Rejuvenescer", "Rejuvenate"),
    ("Performar", "Perform"),
    ("Aperfeiçoar", "Perfect"),

    // 关于
    (
        "A Dr Susan Estética Avançada representa um novo padrão em cuidados de beleza, saúde e bem-estar. Unimos tecnologia de ponta, equipe altamente qualificada e uma abordagem personalizada que valoriza cada fase da sua jornada estética.",
        "Dr Susan Advanced Aesthetics represents a new standard in beauty, health and wellness care. We combine cutting-edge technology, a highly qualified team and a personalized approach that values each phase of your aesthetic journey.",
    ),
    (
        "Nosso compromisso vai além da aparência: buscamos oferecer experiências transformadoras, com conforto, segurança e resultados duradouros, em um ambiente sofisticado e acolhedor.",
        "Our commitment goes beyond appearance: we seek to offer transformative experiences, with comfort, safety and lasting results, in a sophisticated and welcoming environment.",
    ),
    (
        "Somos especialistas em cirurgias plásticas e procedimentos estéticos modernos, guiados pela excelência e pela constante inovação. Descubra como é sentir-se confiante, radiante e plenamente você.",
        "We are specialists in plastic surgery and modern aesthetic procedures, guided by excellence and constant innovation. Discover what it feels like to be confident, radiant and fully yourself.",
    ),

    // 服务卡片
    ("Ginecologia Estética", "Aesthetic Gynecology"),
    ("Ver todos os procedimentos", "View all procedures"),
    ("outros procedimentos", "other procedures"),

    // 项目：高级美学
    ("Bioestimulador de Colágeno Injetável", "Injectable Collagen Biostimulator"),
    ("Depilação a Laser", "Laser Hair Removal"),
    ("Endolift", "Endolift"),
    ("Enzimas Lipolíticas", "Lipolytic Enzymes"),
    ("Secagem de Vasos a Laser", "Laser Vein Treatment"),
    ("Harmonização Facial", "Facial Harmonization"),
    ("Rinoplastia sem cirurgia", "Non-surgical Rhinoplasty"),
    ("Remoção de Tatuagem", "Tattoo Removal"),
    ("Tratamentos Capilares", "Hair Treatments"),
    ("Otoplastia Avançada", "Advanced Otoplasty"),
    ("Protocolo de Rejuvenescimento", "Rejuvenation Protocol"),
    ("Protocolo de Acne", "Acne Protocol"),
    ("Protocolo de Manchas", "Spots Protocol"),
    ("Protocolo de Glúteos", "Buttocks Protocol"),
    ("Protocolo de Firmeza da Pele", "Skin Firmness Protocol"),
    ("Toxina Botulínica", "Botulinum Toxin"),

    // 项目：身体手术
    ("Abdominoplastia Clássica", "Classic Abdominoplasty"),
    ("Abdominoplastia Reversa", "Reverse Abdominoplasty"),
    ("Braquioplastia Reversa", "Reverse Brachioplasty"),
    ("Cruroplastia", "Thigh Lift"),
    ("Correção de Cicatriz", "Scar Correction"),
    ("Gluteoplastia", "Gluteoplasty"),
    ("Ginecomastia", "Gynecomastia"),
    ("Lipoaspiração Convencional", "Conventional Liposuction"),
    ("LAD Avançada", "Advanced LAD"),
    ("Lifting Glúteo", "Buttock Lift"),
    ("Mastopexia", "Mastopexy"),
    ("Mini Abdominoplastia", "Mini Abdominoplasty"),
    ("Onfaloplastia", "Umbilicoplasty"),
    ("Prótese Mamária", "Breast Implants"),
    ("Torsoplastia", "Torsoplasty"),

    // 项目：妇科
    ("Ninfoplastia", "Labiaplasty"),
    ("Clareamento Íntimo", "Intimate Whitening"),
    ("Clitoroplastia", "Clitoroplasty"),
    ("Capuzplastia", "Clitoral Hood Reduction"),
    (
        "Correção de Cistocele, Retocele e Perineoplastia",
        "Cystocele, Rectocele and Perineoplasty Correction",
    ),
    ("Himenoplastia", "Hymenoplasty"),
    ("Métodos de Contracepção", "Contraception Methods"),
    ("Labioplastia dos Grandes Lábios Vaginais", "Labia Majora Labiaplasty"),
    ("Monalisa Touch", "Monalisa Touch"),
    ("Perineoplastia", "Perineoplasty"),
    ("Rejuvene Íntimo", "Intimate Rejuvenation"),
    ("Retirada de Pilicoma Anal", "Anal Skin Tag Removal"),

    // 项目：面部手术
    ("Alectomia", "Alar Base Reduction"),
    ("Bichectomia", "Buccal Fat Removal"),
    ("Blefaroplastia", "Blepharoplasty"),
    ("Brow Lift", "Brow Lift"),
    ("Cervicoplastia", "Neck Lift"),
    ("Facelift Deep Plane com Células-Tronco", "Deep Plane Facelift with Stem Cells"),
    ("Frontoplastia", "Forehead Lift"),
    ("Fox Eyes", "Fox Eyes"),
    ("Lip Lift", "Lip Lift"),
    ("Lipoaspiração Submandibular e Facial", "Submental and Facial Liposuction"),
    ("Lobuloplastia", "Earlobe Repair"),
    ("Mentoplastia com Prótese", "Chin Implant"),
    ("Otoplastia", "Otoplasty"),
    ("Rinoplastia (funcional e estética)", "Rhinoplasty (functional and aesthetic)"),

    // 技术
    ("Argoplasma", "Argoplasma"),
    ("Cm Slim e Embody", "Cm Slim and Embody"),
    ("Emsella", "Emsella"),
    ("Laser CO2 Duoglide", "CO2 Laser Duoglide"),
    ("Laser Etherea MX", "Etherea MX Laser"),
    ("Laser Lavieen", "Lavieen Laser"),
    ("Mesojectgun", "Mesojectgun"),
    ("Morpheus", "Morpheus"),
    ("Renuvion", "Renuvion"),
    ("RedTouch Pro", "RedTouch Pro"),
    ("Safer ou Vaser", "Safer or Vaser"),
    ("Soprano Titanium", "Soprano Titanium"),
    ("Ultraformer MPT", "Ultraformer MPT"),

    // 体验
    ("Experiências que Transformam", "Transformative Experiences"),
    (
        "Cada história é única, cada resultado é uma celebração da sua beleza natural",
        "Each story is unique, each result is a celebration of your natural beauty",
    ),
    (
        "Resultado impecável! A Dra. Susan tem um olhar único para realçar a beleza natural. Me sinto mais confiante e radiante.",
        "Impeccable results! Dr. Susan has a unique eye for enhancing natural beauty. I feel more confident and radiant.",
    ),
    (
        "Profissionalismo excepcional e resultado além das minhas expectativas. Ambiente acolhedor e tecnologia de ponta.",
        "Exceptional professionalism and results beyond my expectations. Welcoming environment and cutting-edge technology.",
    ),
    (
        "Experiência transformadora! Cada detalhe foi pensado para o meu bem-estar. Recomendo de olhos fechados.",
        "Transformative experience! Every detail was designed for my well-being. I highly recommend it.",
    ),
    ("Nossa Trajetória de Excelência", "Our Journey of Excellence"),
    ("Equipe Especializada", "Specialized Team"),
    (
        "Profissionais certificados e em constante atualização",
        "Certified professionals in constant training",
    ),
    ("Satisfação", "Satisfaction"),
    ("Mais de 95% de aprovação entre nossas pacientes", "Over 95% approval among our patients"),
    ("Anos de Experiência", "Years of Experience"),
    (
        "Dedicação à estética e bem-estar feminino",
        "Dedication to aesthetics and women's well-being",
    ),
    ("Procedimentos Realizados", "Procedures Performed"),
    ("Experiência comprovada em diversos tratamentos", "Proven experience in various treatments"),

    // 其他方式
    ("Outras Formas de Trabalhar Comigo", "Other Ways to Work With Me"),
    (
        "Além dos procedimentos estéticos, ofereço oportunidades únicas para quem deseja crescer profissionalmente na área da beleza e bem-estar",
        "Beyond aesthetic procedures, I offer unique opportunities for those who want to grow professionally in the beauty and wellness field",
    ),
    ("Mentoria VIP", "VIP Mentorship"),
    (
        "Acompanhamento individual para alavancar sua carreira na estética.",
        "Individual guidance to boost your career in aesthetics.",
    ),
    ("Palestras", "Lectures"),
    (
        "Palestras inspiradoras sobre beleza, autoestima e empreendedorismo feminino.",
        "Inspiring lectures on beauty, self-esteem and female entrepreneurship.",
    ),
    ("Programa de Estágio", "Internship Program"),
    (
        "Participe do nosso programa e aprenda na prática com a nossa equipe.",
        "Join our program and learn hands-on with our team.",
    ),
    ("Cursos e Aulas", "Courses and Classes"),
    (
        "Aprenda comigo através de cursos e treinamentos exclusivos.",
        "Learn with me through exclusive courses and training.",
    ),
    ("Saiba mais", "Learn more"),

    // 联系
    ("Vamos Conversar?", "Let's Talk?"),
    (
        "Estamos aqui para esclarecer suas dúvidas, ajudar você a alcançar seus objetivos estéticos ou saber mais sobre nossas mentorias, palestras e programas especiais.",
        "We are here to answer your questions, help you achieve your aesthetic goals or learn more about our mentorships, lectures and special programs.",
    ),
    ("Agende sua Consulta", "Schedule Your Appointment"),
    (
        "Preencha o formulário e nossa equipe entrará em contato em até 2 horas",
        "Fill out the form and our team will contact you within 2 hours",
    ),
    ("Nome Completo", "Full Name"),
    ("Seu nome completo", "Your full name"),
    ("Telefone", "Phone"),
    ("E-mail", "Email"),
    ("Motivo do Contato", "Reason for Contact"),
    ("Selecione o motivo do seu contato", "Select the reason for your contact"),
    ("Quero agendar um procedimento estético", "I want to schedule an aesthetic procedure"),
    ("Quero ser sua aluna (programa de estágio)", "I want to be your student (internship program)"),
    ("Quero fazer uma mentoria VIP", "I want VIP mentorship"),
    ("Quero contratar uma palestra", "I want to hire a lecture"),
    ("Tenho dúvidas gerais", "I have general questions"),
    ("Mensagem", "Message"),
    (
        "Conte-nos mais sobre seus objetivos e expectativas...",
        "Tell us more about your goals and expectations...",
    ),
    ("Enviar Mensagem", "Send Message"),
    ("Mensagem Enviada!", "Message Sent!"),
    ("Entraremos em contato em breve.", "We will contact you soon."),

    // 联系信息
    ("Localização", "Location"),
    ("Ver no mapa", "View on map"),
    ("Ligar agora", "Call now"),
    ("Enviar e-mail", "Send email"),
    ("Horário de Funcionamento", "Business Hours"),
    ("Segunda à Sexta: 8h às 19h", "Monday to Friday: 8am to 7pm"),
    ("Sábado: 8h às 17h", "Saturday: 8am to 5pm"),
    ("Domingo: Fechado", "Sunday: Closed"),
    ("Agendar consulta", "Schedule appointment"),
    ("Siga-nos nas Redes Sociais", "Follow Us on Social Media"),
    ("Acompanhe nossos resultados e dicas de beleza", "Follow our results and beauty tips"),

    // 页脚
    ("Especialidades", "Specialties"),
    ("Procedimentos Populares", "Popular Procedures"),
    ("Contato", "Contact"),
    (
        "Referência em estética e bem-estar, oferecendo tratamentos personalizados com tecnologia de ponta e cuidado humanizado.",
        "Reference in aesthetics and wellness, offering personalized treatments with cutting-edge technology and humanized care.",
    ),
    ("Certificação ANVISA", "ANVISA Certification"),
    ("Clínica Certificada", "Certified Clinic"),
    ("Receba Dicas de Beleza e Bem-estar", "Receive Beauty and Wellness Tips"),
    (
        "Cadastre-se e receba conteúdos exclusivos sobre estética e cuidados pessoais",
        "Sign up and receive exclusive content about aesthetics and personal care",
    ),
    ("Seu melhor e-mail", "Your best email"),
    ("Inscrever-se", "Subscribe"),
    ("Todos os direitos reservados.", "All rights reserved."),
    ("Feito com carinho para você", "Made with love for you"),
    ("Política de Privacidade", "Privacy Policy"),
    ("Termos de Uso", "Terms of Use"),
    ("Cookies", "Cookies"),

    // WhatsApp 提示
    ("Fale conosco no WhatsApp", "Chat with us on WhatsApp"),

    // 标志
    ("ESTÉTICA AVANÇADA", "ADVANCED AESTHETICS"),

    // 首屏
    ("Estética Avançada com Excelência Médica", "Advanced Aesthetics with Medical Excellence"),
    (
        "Resultados naturais. Tecnologia de ponta. Atendimento exclusivo.",
        "Natural results. Cutting-edge technology. Exclusive service.",
    ),
    ("Quero essa experiência", "I want this experience"),

    // 关于我
    ("Sobre Mim", "About Me"),
    ("Dra. Susan", "Dr. Susan"),
    (
        "Cirurgiã Plástica e Especialista em Estética Avançada",
        "Plastic Surgeon and Advanced Aesthetics Specialist",
    ),
    (
        "Com anos de dedicação à medicina estética, minha missão é realçar a beleza natural de cada paciente através de uma abordagem conservadora e personalizada. Utilizo as tecnologias mais modernas do mercado, sempre priorizando a segurança, o bem-estar e resultados harmoniosos que elevam a autoestima e a confiança das minhas pacientes.",
        "With years of dedication to aesthetic medicine, my mission is to enhance the natural beauty of each patient through a conservative and personalized approach. I use the most modern technologies on the market, always prioritizing safety, well-being and harmonious results that elevate my patients' self-esteem and confidence.",
    ),
    (
        "Especialista em procedimentos minimamente invasivos",
        "Specialist in minimally invasive procedures",
    ),
    ("Abordagem personalizada e humanizada", "Personalized and humanized approach"),
    (
        "Atualização constante em tecnologias de ponta",
        "Constant updating in cutting-edge technologies",
    ),
    ("Conheça minha trajetória", "Learn about my journey"),
];
