//! Precomputed unit gradients for 2D gradient noise.
//!
//! 256 vectors stored as interleaved `(x, y)` pairs, indexed by
//! [`vector_index_hash`](super::hash::vector_index_hash). Every pair has unit
//! length. The table is plain static data and never written after load.

/// Number of gradient vectors in the table.
pub const GRADIENT_COUNT: usize = 256;

pub static RANDOM_VECTORS: [f64; GRADIENT_COUNT * 2] = [
    0.7257683831471221, 0.6879391354066231,
    0.3626847961218769, -0.9319118727980842,
    -0.9298110898773916, 0.36803714098038703,
    0.9935438975099348, -0.11344833062133702,
    -0.9300204706627864, 0.36750771984839903,
    -0.9845056580505966, 0.17535281368247738,
    -0.8517826456014677, 0.5238953374980203,
    -0.9994548523627309, -0.03301511909098409,
    0.9157248087560312, 0.4018060161679141,
    0.9375544512097397, -0.34783854159193434,
    0.6539286949540071, -0.7565561855643963,
    -0.21685479409649458, -0.9762038712673531,
    -0.994548397063644, -0.1042760082575877,
    0.26845847417603746, -0.9632912579500936,
    0.8386653435305677, 0.5446470798239489,
    -0.19835367860000863, 0.9801305107922335,
    -0.8944848655965898, -0.4470982277068996,
    -0.8953030898622123, -0.44545749211700936,
    0.7965118235161017, -0.6046229527557274,
    0.29944416647373573, -0.9541138250569738,
    0.9981643630075233, 0.06056322664608567,
    0.5446054906212727, 0.8386923509757096,
    0.8197011703323167, 0.572791403004471,
    -0.2635640902868421, 0.9646418870810397,
    -0.9655613519918869, 0.26017547067238994,
    -0.6151008174382364, 0.7884484665384374,
    -0.6487541486022564, 0.7609980648276061,
    0.9468432759107235, -0.321695214236472,
    -0.08879327108425673, 0.9960500765574779,
    0.666527781872164, -0.7454801915494287,
    0.8582195118579091, 0.5132828357410485,
    0.8558671026644915, 0.5171958068050135,
    -0.9224013835828496, 0.38623268577949826,
    0.6038971963458645, -0.7970622160443966,
    0.9521889276014083, 0.3055098135138707,
    -0.90151391348271, -0.4327501170387927,
    0.9530588435274725, 0.30278513961896597,
    -0.2757327047980626, -0.9612343499400885,
    0.9557491259298192, 0.2941829503631825,
    -0.39910610725331414, -0.9169047470447005,
    -0.39293122713671347, 0.9195678608677211,
    -0.9052544794519934, 0.4248697770283271,
    -0.660150266779649, -0.7511335602080087,
    0.9988668588880459, -0.04759199738536454,
    -0.3439686841219128, 0.9389811203338647,
    -0.7199046474127434, 0.6940729778874363,
    0.9961926117183407, 0.08717958681819574,
    0.7478802972801782, -0.6638336093782178,
    -0.4859507534548018, 0.8739861928066772,
    0.9849462421191807, 0.17286092715042436,
    -0.43555240020256003, 0.9001633777697186,
    -0.9998838491337031, -0.015241005267703592,
    0.984888501780215, -0.17318960436793937,
    -0.9507596044853447, 0.309929305614798,
    0.7334058530245073, -0.679791037561834,
    0.9202648889018248, 0.3912959675929617,
    0.4576824427764309, 0.8891157301353965,
    0.9869060897388038, 0.16129590830664078,
    0.892790099023687, 0.45047290605015866,
    -0.06777672910959008, -0.9977005136769276,
    0.3521470486524808, 0.9359446864667523,
    -0.9999134080184215, 0.013159652920412131,
    0.4884632190843694, 0.87258448507966,
    -0.9867090471626904, 0.16249694227060288,
    0.08120170082503836, 0.9966976892634601,
    0.8791236118184308, 0.47659382616995477,
    -0.708563108756587, 0.7056474480285471,
    -0.42703411529798324, -0.904235513774851,
    -0.5686732040196921, 0.8225635458917309,
    -0.9460490175828957, -0.3240235428644621,
    -0.921461438067594, 0.3884698420140251,
    -0.7832621864899101, 0.6216915209451109,
    0.1512676036682877, -0.9884928487755761,
    0.6228600156865179, 0.7823333054772695,
    0.449634454846466, 0.8932126605769318,
    -0.9239783777466857, 0.38244471163372484,
    -0.8483831734364082, 0.5293826508584971,
    0.9844138971506411, -0.17586722007437036,
    -0.6966871999527854, 0.717375038192679,
    0.9700954310371632, 0.24272382388389574,
    -0.7101526036512632, -0.7040477821336645,
    0.9490546454971437, 0.3151115355874661,
    0.7962298467534987, 0.6049942405832471,
    -0.7178790038586955, -0.6961678934128225,
    -0.20319393026196705, 0.9791385125224596,
    0.8651060754135488, -0.5015889535093125,
    -0.4794418620610229, 0.8775736441481473,
    -0.41540126469419447, 0.9096382738706984,
    0.45029685558433735, 0.8928789065998023,
    -0.015900877643870517, 0.9998735730531909,
    -0.221259319954967, 0.9752150087714326,
    -0.9809588909019825, 0.19421548434754698,
    0.977130658942213, 0.2126397783933114,
    -0.208909381690439, -0.9779350030762364,
    0.9879165887939325, -0.15498649484958363,
    -0.3650507221169097, 0.9309876316481991,
    -0.9626264505894071, -0.2708326358207959,
    -0.9998094689817012, 0.019519880494735093,
    0.439623611483339, 0.8981820974759774,
    0.5588656335762496, 0.829258224925998,
    -0.45215799942756074, 0.89193785857181,
    0.5660764100485453, -0.824352775204009,
    0.7942419576198301, -0.6076016069401232,
    -0.9262409213989428, -0.37693203037953354,
    0.8216335747990219, -0.5700160250054205,
    0.5455144920522992, -0.8381013894278675,
    0.9283468474685839, -0.37171512048226113,
    -0.7406608467017008, 0.6718790889461582,
    -0.9383960497756897, 0.3455616497318261,
    0.5481734692620408, 0.8363646618534396,
    -0.754450495236076, -0.656356953370679,
    0.850661826500201, 0.5257132839631715,
    -0.6481985692349665, 0.7614713486676583,
    0.9556278866372384, 0.2945765474053312,
    0.34088598010124677, -0.9401046476698285,
    -0.9368210688876749, -0.3498089262556836,
    -0.2614428386740659, 0.9652189607058319,
    -0.5057180191540562, -0.8626988380094746,
    -0.979755486290863, 0.2001978698262166,
    0.9792058657515821, 0.20286910183094575,
    0.3664693307416344, -0.9304301315121832,
    0.8218372154382885, 0.5697223809195494,
    -0.6124920474829755, 0.7904767496708,
    0.9891440125371989, -0.14694938741556507,
    -0.28184967465694105, 0.9594585769567003,
    0.9631343431679559, -0.2690208858256739,
    -0.9991065411848454, -0.04226250538781161,
    0.994466054655339, -0.1050583939447212,
    0.9356527444277345, -0.3529220053281582,
    -0.9698834399048305, 0.2435695239523473,
    -0.974014279280634, 0.22648660834015583,
    0.6417060571438971, 0.7669506739190165,
    0.6312330332317387, -0.7755932295714414,
    0.7647192495308804, 0.6443636158233385,
    -0.9345697643729154, 0.35577992568433864,
    0.9999464941988256, 0.010344502862771693,
    -0.8621068998851549, -0.5067264480668121,
    -0.9916019081749367, -0.12932770663637552,
    0.3834127471805911, -0.9235771030614781,
    -0.9351880100985945, 0.35415164233394586,
    0.9633938729580585, -0.268089995238301,
    -0.6471882816663138, -0.7623301962232665,
    -0.6590676503153946, -0.7520836604445976,
    -0.6814315375793797, 0.7318818617729247,
    0.9880105788565776, 0.15438619131091474,
    -0.9588985338717214, -0.2837491880845884,
    -0.9371258673643287, 0.34899155966391876,
    0.5059159340016165, 0.8625827889097208,
    -0.7312789737592302, -0.6820784870802238,
    0.12038167244273823, 0.9927276831739353,
    -0.4193322288928577, 0.9078328490486275,
    -0.03419998589097053, 0.9994150093755133,
    0.7980209410025731, 0.6026297185846111,
    0.9933661372868652, 0.11499442287247168,
    -0.601541828521375, 0.7988413037263162,
    0.32348957584712623, 0.9462317339416632,
    -0.9999727406277434, 0.007383630640802786,
    -0.02198924265611218, -0.9997582073718678,
    -0.01614556861591807, -0.9998696518117093,
    0.9872339314506157, 0.15927700585006296,
    -0.1591467722409931, 0.987254934090113,
    -0.6862680000421862, -0.7273487692421688,
    -0.9789254419518854, 0.20421796957982422,
    0.9948579279885967, 0.10128031950105654,
    0.9630769450366921, 0.26922629503596485,
    0.4828629608915213, 0.8756959295320912,
    0.5639524399954031, -0.8258072689333942,
    0.7603449472574887, -0.6495194848347561,
    -0.5819433715745137, -0.8132293110067341,
    0.259249118044921, -0.9658104859613663,
    0.5511309651676997, -0.8344187553221223,
    -0.20536932865200352, 0.978684545116058,
    0.39720924645714584, -0.9177280722136304,
    0.5184853738761507, 0.8550864968390673,
    -0.21631670819979354, 0.9763232465498327,
    0.2720916902156042, 0.9622713297795044,
    0.3285222408293448, -0.9444962346565845,
    0.2604185488861452, -0.9654958204964093,
    -0.9975083899749777, -0.07054794064696618,
    -0.8652246493326393, -0.5013843896525013,
    -0.5740062989571326, -0.8188508831023723,
    -0.8550529152169574, -0.5185407526694336,
    -0.8797548011779502, 0.4754276914572238,
    0.5655168653071444, -0.824736730753021,
    0.8836417056894224, 0.46816379181466844,
    -0.13341305412916063, 0.9910605213547403,
    -0.3362149747855977, -0.941785267845022,
    -0.1824046054895305, -0.9832235554014198,
    0.10300021680043121, 0.9946813335631991,
    0.5635238890585668, -0.8260997678611877,
    0.9788575846683762, 0.2045429757708456,
    0.26509939312167125, 0.9642210907082056,
    0.005903095708961299, 0.9999825765787376,
    -0.5969666490120293, -0.8022660531066664,
    0.8302447257579891, 0.5573990449857636,
    0.9795994958794572, -0.20095976630339082,
    -0.8993821910328934, -0.43716321260242386,
    0.8232399884703888, 0.5676935100767615,
    0.6467453513183185, -0.7627060053180025,
    -0.9891162230951517, 0.14713632185827566,
    0.8659368085966006, 0.500153419979844,
    0.9792349154333343, -0.2027288346443857,
    -0.7992693405830867, 0.6009729787635029,
    -0.9350389586796819, 0.35454498410105323,
    -0.9982119928304253, 0.05977304885574232,
    -0.47852367525675193, -0.8780746507095912,
    0.6359411545700535, -0.7717375511947746,
    0.7428559204033469, 0.6694513287175523,
    -0.8466115650028335, 0.5322112907515707,
    0.6405573861622905, -0.7679103040283639,
    -0.9401693501067712, 0.34070748908677,
    0.6901721502599201, -0.7236452190166106,
    0.9656164216169394, -0.25997101050635846,
    0.9407208346199034, -0.3391818263292305,
    0.23778400451829465, 0.9713180566607642,
    0.2009870449840833, -0.9795938994035059,
    0.22578653028746287, 0.9741768026086172,
    0.9440360860860758, -0.3298421867610073,
    -0.4643448484400235, -0.8856544821357885,
    0.9687973439155665, 0.24785420396302268,
    0.940339984800971, 0.340236260537453,
    -0.21546762870603794, -0.976510983542836,
    0.9782581329622612, 0.2073909961719432,
    0.7749635134556864, 0.6320059752980333,
    0.8817652925147547, 0.47168842355560214,
    -0.7929526159570877, -0.6092833075399421,
    -0.8587289171723788, -0.512430138469581,
    0.44378625440669567, 0.8961326689724438,
    0.663679543607015, -0.7480170207940354,
    0.3700999323788903, 0.9289919483252483,
    -0.581095721089377, -0.8138352185372767,
    -0.9442955166532652, 0.329098734772018,
    -0.9089604715778506, 0.4168823108611966,
    -0.21022178807159334, 0.9776537218361019,
    -0.988612607043818, -0.15048293323173068,
    -0.7435504226513872, 0.6686798703228201,
    0.5982624377909964, 0.8013002280845639,
    -0.5067290172281131, 0.8621053897865566,
    0.8483424059124565, 0.5294479788710738,
    0.6758008294873706, 0.7370842820629008,
    -0.6973930684326768, 0.7166888502705032,
    0.9844358242665823, 0.17574443917397445,
    -0.9953199704892619, 0.09663413654219061,
    0.7015934174970248, -0.7125774880845209,
    -0.9705652011222277, -0.24083851513113463,
    0.994763041036175, -0.10220808279417723,
    0.16308272335093055, 0.9866123987384529,
    -0.964205965347472, 0.26515440103522603,
    -0.6654742915670779, 0.746420770921667,
    -0.654351968371844, 0.7561901225802234,
    0.4312007111361637, 0.902256031687052,
    -0.26267912677135224, -0.964883244936215,
    0.571948712396058, 0.8202893821015187,
    -0.9757680239439714, 0.2188075945859218,
    0.8713560789612635, 0.4906511832832488,
    -0.9193838900002579, -0.39336149126216435,
];

/// Gradient vector at table slot `index` (only the low 8 bits are used).
#[inline]
pub fn gradient(index: usize) -> (f64, f64) {
    let i = (index & 0xff) << 1;
    (RANDOM_VECTORS[i], RANDOM_VECTORS[i + 1])
}
