use crate::service::{self, HttpTriviaService};
use clap::Args;
use trivia_core as trivia;
use trivia::{Board, BoardId, Coord2, GameSession, LoaderConfig, RevealState, SessionPhase};
use yew::prelude::*;

/// Seed for the category draw from JavaScript's Math.random
fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let high = (random() * f64::from(u32::MAX)) as u64;
    let low = (random() * f64::from(u32::MAX)) as u64;
    (high << 32) | low
}

pub(crate) enum Msg {
    StartOrRestart,
    Loaded(BoardId, trivia::Result<Board>),
    Reveal(BoardId, Coord2),
}

/// What the page shows for the current session phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ViewGameState {
    Idle,
    Loading,
    Ready,
    Failed,
}

impl ViewGameState {
    fn of(session: &GameSession) -> Self {
        match session.phase() {
            SessionPhase::Idle => Self::Idle,
            SessionPhase::Loading(_) => Self::Loading,
            SessionPhase::Ready(_) if session.board().is_some() => Self::Ready,
            SessionPhase::Ready(_) => Self::Idle,
            SessionPhase::Failed(_) => Self::Failed,
        }
    }

    const fn shows_loader(self) -> bool {
        matches!(self, Self::Loading)
    }

    const fn shows_board(self) -> bool {
        matches!(self, Self::Ready)
    }

    const fn shows_error(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// One rendered cell of the board body.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CellView {
    coords: Coord2,
    state: Option<RevealState>,
    text: String,
}

impl CellView {
    fn at(board: &Board, coords: Coord2) -> Self {
        Self {
            coords,
            state: board.state_at(coords),
            text: board.cell_text(coords).to_string(),
        }
    }

    const fn class(&self) -> &'static str {
        use RevealState::*;
        match self.state {
            None => "empty",
            Some(Hidden) => "hidden",
            Some(Question) => "question",
            Some(Answer) => "answer",
        }
    }
}

/// The full grid, row by row, whatever the categories actually hold.
fn board_rows(board: &Board) -> Vec<Vec<CellView>> {
    let (cols, rows) = board.size();
    (0..rows)
        .map(|y| (0..cols).map(|x| CellView::at(board, (x, y))).collect())
        .collect()
}

#[derive(Properties, Clone, PartialEq)]
struct ClueCellProps {
    board: BoardId,
    cell: CellView,
    callback: Callback<(BoardId, Coord2)>,
}

#[function_component(ClueCell)]
fn clue_cell(props: &ClueCellProps) -> Html {
    let ClueCellProps {
        board,
        cell,
        callback,
    } = props.clone();

    let class = classes!("clue", cell.class());
    let coords = cell.coords;
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        log::trace!("{:?} click on board {}", coords, board.get());
        callback.emit((board, coords));
    });

    html! {
        <td {class} {onclick}>{cell.text}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Base URL of the trivia service
    #[arg(long, default_value = service::DEFAULT_API)]
    pub(crate) api: String,

    /// How many categories to sample the board from
    #[arg(long, default_value_t = LoaderConfig::DEFAULT_POOL_SIZE)]
    pub(crate) pool_size: u16,

    /// Attempts per request when the service is unreachable
    #[arg(long, default_value_t = 1)]
    pub(crate) attempts: u8,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,
}

impl Default for GameProps {
    fn default() -> Self {
        Self {
            api: service::DEFAULT_API.to_string(),
            pool_size: LoaderConfig::DEFAULT_POOL_SIZE,
            attempts: 1,
            seed: None,
        }
    }
}

pub(crate) struct GameView {
    session: GameSession,
    service: HttpTriviaService,
    config: LoaderConfig,
    fixed_seed: Option<u64>,
    games_started: u64,
}

impl GameView {
    /// A fixed seed still gives every new game its own draw.
    fn next_seed(&mut self) -> u64 {
        let seed = self
            .fixed_seed
            .map_or_else(js_random_seed, |seed| seed.wrapping_add(self.games_started));
        self.games_started += 1;
        seed
    }

    fn start_or_restart(&mut self, ctx: &Context<Self>) -> bool {
        let Some(id) = self.session.start_or_restart() else {
            return false;
        };

        let service = self.service.clone();
        let config = self.config;
        let seed = self.next_seed();
        ctx.link().send_future(async move {
            let result = trivia::load_board(&service, &config, seed).await;
            Msg::Loaded(id, result)
        });
        true
    }

    fn view_board(&self, ctx: &Context<Self>, id: BoardId, board: &Board) -> Html {
        let callback = ctx
            .link()
            .callback(|(id, coords): (BoardId, Coord2)| Msg::Reveal(id, coords));

        html! {
            <table id="jeopardy" key={id.get().to_string()}>
                <thead>
                    <tr>
                        { for board.titles().map(|title| html! { <th>{title}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for board_rows(board).into_iter().map(|row| html! {
                            <tr>
                                {
                                    for row.into_iter().map(|cell| {
                                        let callback = callback.clone();
                                        html! {
                                            <ClueCell board={id} {cell} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            session: GameSession::new(),
            service: HttpTriviaService::new(&props.api),
            config: LoaderConfig::new(props.pool_size, props.attempts),
            fixed_seed: props.seed,
            games_started: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartOrRestart => self.start_or_restart(ctx),
            Loaded(id, result) => self.session.finish_loading(id, result),
            Reveal(id, coords) => self.session.reveal(id, coords).has_update(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = ViewGameState::of(&self.session);
        let loading = state.shows_loader();
        let label = self.session.trigger_label();
        let onclick = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            Msg::StartOrRestart
        });

        html! {
            <div class="trivia">
                <nav>
                    <button id="play" {onclick} disabled={loading}>{label}</button>
                </nav>
                if loading {
                    <div class="loader" aria-busy="true"/>
                }
                if state.shows_error() {
                    if let Some(err) = self.session.error() {
                        <p class="error">{err.to_string()}</p>
                    }
                }
                if state.shows_board() {
                    if let Some((id, board)) = self.session.board() {
                        { self.view_board(ctx, id, board) }
                    }
                }
            </div>
        }
    }
}
